pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{
    InitialConditions, OutcomePreview, SimulationConfig, SimulationLoop, TrackWorld,
};
pub use crate::bodies::{Body, BodyColor, BodyId};
pub use crate::collision::CollisionResolver;

/// Error types for the simulation
pub mod error {
    use thiserror::Error;

    /// Why a set of form fields was rejected
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum InputError {
        #[error("field `{field}` is not a valid number")]
        NotANumber { field: &'static str },

        #[error("mass `{field}` must be positive")]
        NonPositiveMass { field: &'static str },

        #[error("values are too large to simulate")]
        OutOfRange,
    }

    impl InputError {
        /// The notice shown to the user for this failure
        pub fn user_message(&self) -> &'static str {
            match self {
                InputError::NotANumber { .. } => "Please fill in all fields with valid numbers!",
                InputError::NonPositiveMass { .. } => "Masses must be positive values!",
                InputError::OutOfRange => "Values are too large to simulate!",
            }
        }
    }

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum SimError {
        #[error("Invalid input: {0}")]
        InvalidInput(#[from] InputError),

        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::SimError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
