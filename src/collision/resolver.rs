#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Velocities of both bodies after a collision
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ResolvedVelocities {
    /// Velocity of the first body
    pub v1: f32,

    /// Velocity of the second body
    pub v2: f32,
}

/// Closed-form one-dimensional elastic collision
///
/// Conserves both momentum and kinetic energy. Callers guarantee that both
/// masses are positive, so the denominator is never zero.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Computes the post-collision velocities of two bodies
    ///
    /// ```text
    /// v1' = ((m1 - m2) * v1 + 2 * m2 * v2) / (m1 + m2)
    /// v2' = ((m2 - m1) * v2 + 2 * m1 * v1) / (m1 + m2)
    /// ```
    #[inline]
    pub fn resolve(v1: f32, v2: f32, m1: f32, m2: f32) -> ResolvedVelocities {
        let total_mass = m1 + m2;

        ResolvedVelocities {
            v1: ((m1 - m2) * v1 + 2.0 * m2 * v2) / total_mass,
            v2: ((m2 - m1) * v2 + 2.0 * m1 * v1) / total_mass,
        }
    }
}
