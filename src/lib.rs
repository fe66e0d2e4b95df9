// Domain layer - the board engine
pub mod domain;

// Application layer - configuration and the driving loop state
pub mod application;

// Infrastructure layer - console output
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use domain::{Board, Bounds, Cell, GenerationStats, Pattern, Placement, Rule, presets};
pub use application::{RunConfig, Simulation, Viewport};
pub use error::{ConfigError, Error, PatternError, Result, RuleParseError};
