pub mod world;
pub mod config;
pub mod events;
pub mod input;
pub mod preview;
pub mod render;
pub mod scheduler;
pub mod simulation_loop;
mod track;

pub use self::world::TrackWorld;
pub use self::config::SimulationConfig;
pub use self::events::{EventQueue, CollisionEvent, WallEvent, StepFlags};
pub use self::input::{InitialConditions, NOTICE_DURATION};
pub use self::preview::{OutcomePreview, kinetic_energy, system_momentum};
pub use self::render::{Frame, Renderer};
pub use self::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use self::simulation_loop::{LoopState, SimulationLoop};
pub use self::track::{Track, Wall};
