//! # senet-engine
//!
//! A rules engine for Senet, the ancient Egyptian race game: thirty squares,
//! five pieces a side, four casting sticks, and a surprising number of
//! sharp edges. Adjacent pairs are immune to capture, blocks of three wall
//! off the path, a water trap sends pieces back to be reborn, and throws
//! can grant extra turns or carry over past the exit.
//!
//! ## Design Principles
//!
//! 1. **The engine is the only authority**: all legality, side effects, and
//!    turn ownership live behind `Game`; callers (UIs, AIs) only roll,
//!    query, and pick a piece.
//!
//! 2. **Illegality is data, not failure**: moves that cannot happen are
//!    `false`/`None` results. Panics are reserved for contract violations.
//!
//! 3. **Deterministic by injection**: all randomness flows through an owned
//!    `GameRng`, and the dice sit behind `DiceSource`, so a scripted
//!    `FixedDice` replays any scenario exactly.
//!
//! ## Modules
//!
//! - `core`: sides, pieces, RNG, the stick dice
//! - `board`: square classification and the square-to-piece mapping
//! - `game`: the state machine (roll lifecycle, legality, execution, wins)
//! - `ai`: the automated Dark-side opponent and its difficulty tiers

pub mod ai;
pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, FixedDice, GameRng, Piece, PieceId, Position, Side, SideMap, StickDice,
    STICK_COUNT,
};

pub use crate::board::{
    Board, FIRST_SQUARE, HOME_ROW_LAST, LAST_SQUARE, REBIRTH_SQUARE, SAFE_SQUARES, WATER_SQUARE,
};

pub use crate::game::{Game, GameBuilder};

pub use crate::ai::{select_piece, AiOpponent, Difficulty, TurnOutcome};
