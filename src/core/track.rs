use crate::bodies::Body;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// One of the two ends of the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Wall {
    Left,
    Right,
}

/// A bounded track running from zero to `width`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Track {
    width: f32,
}

impl Track {
    /// Creates a track of the given width
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    /// Returns the track width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Keeps a body on the track
    ///
    /// A body whose edge crossed a wall is placed flush against that wall
    /// and its velocity is reversed and scaled by `damping`. The track is
    /// wider than any body, so at most one wall is hit.
    pub fn constrain(&self, body: &mut Body, damping: f32) -> Option<Wall> {
        let wall = if body.left_edge() < 0.0 {
            body.set_position(body.half_size());
            Wall::Left
        } else if body.right_edge() > self.width {
            body.set_position(self.width - body.half_size());
            Wall::Right
        } else {
            return None;
        };

        body.set_velocity(-body.get_velocity() * damping);
        Some(wall)
    }
}
