use crate::bodies::{BodyColor, BodyId};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A point mass constrained to the track axis
///
/// Size and mass are fixed when the body is created. Position and velocity
/// are mutated every step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// Which body this is
    id: BodyId,

    /// Center position along the track
    position: f32,

    /// Signed velocity along the track, in track units per second
    velocity: f32,

    /// Collision and visual diameter
    size: f32,

    /// The body's mass, always positive
    mass: f32,

    /// Rendering identity
    color: BodyColor,
}

impl Body {
    /// Creates a new body
    pub fn new(id: BodyId, position: f32, velocity: f32, size: f32, mass: f32, color: BodyColor) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive");
        debug_assert!(size >= 0.0, "body size must not be negative");

        Self {
            id,
            position,
            velocity,
            size,
            mass,
            color,
        }
    }

    /// Returns which body this is
    pub fn get_id(&self) -> BodyId {
        self.id
    }

    /// Returns the body's center position
    pub fn get_position(&self) -> f32 {
        self.position
    }

    /// Sets the body's center position
    pub fn set_position(&mut self, position: f32) {
        self.position = position;
    }

    /// Moves the body along the track by `offset`
    pub fn translate(&mut self, offset: f32) {
        self.position += offset;
    }

    /// Returns the body's signed velocity
    pub fn get_velocity(&self) -> f32 {
        self.velocity
    }

    /// Sets the body's signed velocity
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Returns the body's diameter
    pub fn get_size(&self) -> f32 {
        self.size
    }

    /// Returns half of the body's diameter
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Returns the body's rendering color
    pub fn get_color(&self) -> BodyColor {
        self.color
    }

    /// Position of the left edge
    pub fn left_edge(&self) -> f32 {
        self.position - self.half_size()
    }

    /// Position of the right edge
    pub fn right_edge(&self) -> f32 {
        self.position + self.half_size()
    }

    /// Whether the body is moving toward larger positions
    pub fn moves_right(&self) -> bool {
        self.velocity > 0.0
    }
}
