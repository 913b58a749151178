use crate::collision::CollisionResolver;
use crate::core::preview::{kinetic_energy, system_momentum};
use crate::error::InputError;
use crate::Result;
use std::time::Duration;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How long a host keeps a validation notice on screen
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Validated initial conditions of a run
///
/// Velocities are finite, both masses are strictly positive, and momentum,
/// kinetic energy and every velocity reachable by exchanging that energy
/// stay finite. The only way to obtain a value is through validation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct InitialConditions {
    v1: f32,
    v2: f32,
    m1: f32,
    m2: f32,
}

impl InitialConditions {
    /// Validates four numeric fields
    pub fn new(v1: f32, v2: f32, m1: f32, m2: f32) -> Result<Self> {
        let fields = [("v1", v1), ("v2", v2), ("m1", m1), ("m2", m2)];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(InputError::NotANumber { field }.into());
        }

        if m1 <= 0.0 {
            return Err(InputError::NonPositiveMass { field: "m1" }.into());
        }
        if m2 <= 0.0 {
            return Err(InputError::NonPositiveMass { field: "m2" }.into());
        }

        let conditions = Self { v1, v2, m1, m2 };
        if !conditions.is_representable() {
            return Err(InputError::OutOfRange.into());
        }

        Ok(conditions)
    }

    /// Parses and validates four text fields
    pub fn from_fields(v1: &str, v2: &str, m1: &str, m2: &str) -> Result<Self> {
        Self::new(
            parse_field("v1", v1)?,
            parse_field("v2", v2)?,
            parse_field("m1", m1)?,
            parse_field("m2", m2)?,
        )
    }

    /// Initial velocity of the first body
    pub fn v1(&self) -> f32 {
        self.v1
    }

    /// Initial velocity of the second body
    pub fn v2(&self) -> f32 {
        self.v2
    }

    /// Mass of the first body
    pub fn m1(&self) -> f32 {
        self.m1
    }

    /// Mass of the second body
    pub fn m2(&self) -> f32 {
        self.m2
    }

    /// Largest speed either body can reach during the run
    ///
    /// Elastic collisions conserve the kinetic energy and walls only remove
    /// it, so no body ever moves faster than the lighter body would carrying
    /// all of it.
    pub fn speed_bound(&self) -> f32 {
        let energy = kinetic_energy(self.m1, self.v1, self.m2, self.v2);
        (2.0 * energy / self.m1.min(self.m2)).sqrt()
    }

    fn is_representable(&self) -> bool {
        let bound = self.speed_bound();
        let worst = CollisionResolver::resolve(bound, -bound, self.m1, self.m2);

        [
            system_momentum(self.m1, self.v1, self.m2, self.v2),
            kinetic_energy(self.m1, self.v1, self.m2, self.v2),
            bound,
            worst.v1,
            worst.v2,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

#[cfg(feature = "serialize")]
impl<'de> Deserialize<'de> for InitialConditions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            v1: f32,
            v2: f32,
            m1: f32,
            m2: f32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.v1, raw.v2, raw.m1, raw.m2).map_err(serde::de::Error::custom)
    }
}

fn parse_field(field: &'static str, text: &str) -> std::result::Result<f32, InputError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InputError::NotANumber { field })
}
