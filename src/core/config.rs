use crate::core::InitialConditions;
use crate::error::{InputError, SimError};
use crate::math;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the track simulation
///
/// Track units are the rendering units of the host (pixels for a canvas,
/// columns for a terminal). Physical velocities are multiplied by
/// `velocity_scale` to obtain track velocities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed time step applied on every frame, in seconds
    pub time_step: f32,

    /// Length of the track, in track units
    pub track_width: f32,

    /// Fraction of the speed kept after hitting a wall
    pub wall_damping: f32,

    /// Extra distance each body is pushed when separating an overlap
    pub separation_margin: f32,

    /// Track units per physical unit of velocity
    pub velocity_scale: f32,

    /// Body diameter per unit of mass
    pub size_per_mass: f32,

    /// Smallest body diameter
    pub min_body_size: f32,

    /// Largest body diameter
    pub max_body_size: f32,

    /// Starting positions of both bodies, as fractions of the track width
    pub start_fractions: [f32; 2],
}

impl SimulationConfig {
    /// Returns the diameter of a body of the given mass
    pub fn body_size(&self, mass: f32) -> f32 {
        math::clamp(mass * self.size_per_mass, self.min_body_size, self.max_body_size)
    }

    /// Returns the starting position of the body at `index`
    pub fn start_position(&self, index: usize) -> f32 {
        self.track_width * self.start_fractions[index]
    }

    /// Sets the track width
    pub fn with_track_width(mut self, track_width: f32) -> Self {
        self.track_width = track_width;
        self
    }

    /// Sets the wall damping factor
    pub fn with_wall_damping(mut self, wall_damping: f32) -> Self {
        self.wall_damping = wall_damping;
        self
    }

    /// Checks that a run's velocities stay finite once scaled to track units
    pub fn check_conditions(&self, conditions: &InitialConditions) -> Result<()> {
        if (conditions.speed_bound() * self.velocity_scale).is_finite() {
            Ok(())
        } else {
            Err(InputError::OutOfRange.into())
        }
    }

    /// Checks that the configuration describes a usable track
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| -> Result<()> { Err(SimError::InvalidConfig(message)) };

        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return invalid(format!("time step must be positive, got {}", self.time_step));
        }
        if !(self.velocity_scale.is_finite() && self.velocity_scale > 0.0) {
            return invalid(format!("velocity scale must be positive, got {}", self.velocity_scale));
        }
        if !(0.0..1.0).contains(&self.wall_damping) {
            return invalid(format!("wall damping must be in [0, 1), got {}", self.wall_damping));
        }
        if !(self.separation_margin.is_finite() && self.separation_margin >= 0.0) {
            return invalid(format!(
                "separation margin must not be negative, got {}",
                self.separation_margin
            ));
        }
        if !(self.min_body_size > 0.0 && self.min_body_size <= self.max_body_size) {
            return invalid(format!(
                "body size bounds are inverted: {}..{}",
                self.min_body_size, self.max_body_size
            ));
        }
        if !(self.track_width.is_finite() && self.track_width > self.max_body_size) {
            return invalid(format!(
                "track width {} must exceed the largest body size {}",
                self.track_width, self.max_body_size
            ));
        }
        if self.start_fractions.iter().any(|f| !(0.0..=1.0).contains(f)) {
            return invalid(format!("start fractions must lie on the track, got {:?}", self.start_fractions));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.016, // about one 60 Hz frame
            track_width: 800.0,
            wall_damping: 0.95,
            separation_margin: 1.0,
            velocity_scale: 10.0,
            size_per_mass: 8.0,
            min_body_size: 20.0,
            max_body_size: 50.0,
            start_fractions: [0.25, 0.75],
        }
    }
}
