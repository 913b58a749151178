use crate::bodies::Body;
use crate::integration::Integrator;

/// Simple forward Euler integrator
///
/// There are no forces on the track, so only the position changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn integrate(&mut self, body: &mut Body, dt: f32) {
        body.translate(body.get_velocity() * dt);
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
