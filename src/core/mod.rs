//! Core engine types: sides, pieces, RNG, and the stick dice.
//!
//! These are the fundamental building blocks shared by the board, the game
//! state machine, and the AI.

pub mod dice;
pub mod piece;
pub mod rng;
pub mod side;

pub use dice::{DiceSource, FixedDice, StickDice, STICK_COUNT};
pub use piece::{Piece, PieceId, Position};
pub use rng::GameRng;
pub use side::{Side, SideMap};
