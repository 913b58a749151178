use crate::bodies::Body;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances a body's position over a time step
    fn integrate(&mut self, body: &mut Body, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
