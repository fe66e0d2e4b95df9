mod cell;
mod rules;
mod board;
mod patterns;

pub use cell::{Cell, MOORE_OFFSETS};
pub use rules::{Rule, named_rules};
pub use board::{Board, Bounds, GenerationStats};
pub use patterns::{Pattern, Placement, presets};
