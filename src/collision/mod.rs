pub mod resolver;
pub mod detection;
pub mod separation;

pub use self::resolver::{CollisionResolver, ResolvedVelocities};
pub use self::detection::{closing_velocity, detect_contact, Contact};
pub use self::separation::separate;
