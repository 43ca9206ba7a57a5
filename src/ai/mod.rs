//! The automated opponent: difficulty-tiered piece selection and the
//! Dark-side turn loop.

pub mod opponent;
pub mod policy;

pub use opponent::{AiOpponent, TurnOutcome};
pub use policy::{select_piece, Difficulty};
