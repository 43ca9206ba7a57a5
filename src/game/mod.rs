//! The game state machine: roll lifecycle, move legality and execution,
//! turn ownership, and win detection.

pub mod engine;

pub use engine::{Game, GameBuilder};
