mod config;
mod simulation;
mod viewport;

pub use config::RunConfig;
pub use simulation::Simulation;
pub use viewport::{MAX_AREA_SIZE, Viewport};
