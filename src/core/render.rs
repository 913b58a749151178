use crate::bodies::{Body, BodyId};
use crate::core::events::StepFlags;
use crate::core::{Track, TrackWorld};

/// Read-only view of a run handed to the renderer after every step
pub struct Frame<'a> {
    world: &'a TrackWorld,
    flags: StepFlags,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(world: &'a TrackWorld, flags: StepFlags) -> Self {
        Self { world, flags }
    }

    /// Both bodies, with their positions, sizes, colors and velocities
    pub fn bodies(&self) -> &'a [Body; 2] {
        self.world.bodies()
    }

    /// The track the bodies live on
    pub fn track(&self) -> &'a Track {
        self.world.get_track()
    }

    /// Live velocity of a body in physical units
    pub fn live_velocity(&self, id: BodyId) -> f32 {
        self.world.live_velocity(id)
    }

    /// Collisions resolved since the run started
    pub fn collision_count(&self) -> u32 {
        self.world.collision_count()
    }

    /// What the step that produced this frame did
    pub fn flags(&self) -> StepFlags {
        self.flags
    }

    /// The full world, for renderers that need more than the summary
    pub fn world(&self) -> &'a TrackWorld {
        self.world
    }
}

/// Trait for collaborators that draw a frame
pub trait Renderer {
    /// The error a failed draw produces
    type Error;

    /// Draws the state after a step
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}
