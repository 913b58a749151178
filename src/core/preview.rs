use crate::collision::CollisionResolver;
use crate::core::InitialConditions;
use crate::math;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Total momentum of two bodies
#[inline]
pub fn system_momentum(m1: f32, v1: f32, m2: f32, v2: f32) -> f32 {
    m1 * v1 + m2 * v2
}

/// Total kinetic energy of two bodies
#[inline]
pub fn kinetic_energy(m1: f32, v1: f32, m2: f32, v2: f32) -> f32 {
    0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2
}

/// Expected outcome of a single collision between the initial bodies
///
/// Computed once when a run starts, using the same resolver as live
/// stepping, so the displayed final velocities match the simulated ones
/// after the first collision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OutcomePreview {
    pub initial_velocities: [f32; 2],
    pub final_velocities: [f32; 2],
    pub initial_momentum: f32,
    pub final_momentum: f32,
    pub initial_energy: f32,
    pub final_energy: f32,

    /// Sum of the absolute momenta of both bodies before the collision
    momentum_magnitude: f32,
}

impl OutcomePreview {
    /// Resolves the initial conditions once
    pub fn compute(conditions: &InitialConditions) -> Self {
        let (v1, v2, m1, m2) = (conditions.v1(), conditions.v2(), conditions.m1(), conditions.m2());
        let resolved = CollisionResolver::resolve(v1, v2, m1, m2);

        Self {
            initial_velocities: [v1, v2],
            final_velocities: [resolved.v1, resolved.v2],
            initial_momentum: system_momentum(m1, v1, m2, v2),
            final_momentum: system_momentum(m1, resolved.v1, m2, resolved.v2),
            initial_energy: kinetic_energy(m1, v1, m2, v2),
            final_energy: kinetic_energy(m1, resolved.v1, m2, resolved.v2),
            momentum_magnitude: (m1 * v1).abs() + (m2 * v2).abs(),
        }
    }

    /// Whether momentum is the same before and after, within tolerance
    pub fn momentum_conserved(&self) -> bool {
        math::nearly_conserved(self.initial_momentum, self.final_momentum, self.momentum_magnitude)
    }

    /// Whether kinetic energy is the same before and after, within tolerance
    pub fn energy_conserved(&self) -> bool {
        math::nearly_conserved(self.initial_energy, self.final_energy, self.initial_energy)
    }
}
