//! Piece identity and position.
//!
//! Each side plays five pieces; all ten get a stable `PieceId` at setup so
//! callers (and the AI) can refer to a piece across moves without holding a
//! reference into the board. A piece is either on a square (`Position::On`)
//! or borne off (`Position::Off`); there is no other way to leave the board.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Stable identifier for one of the ten pieces, assigned at setup (0-9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

/// Where a piece currently is.
///
/// `On(n)` carries a square in `1..=30`. `Off` is the borne-off state;
/// a borne-off piece never re-enters play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// On the board, at the given square.
    On(u8),
    /// Borne off the board.
    Off,
}

impl Position {
    /// The square this position occupies, or `None` if borne off.
    #[must_use]
    pub const fn square(self) -> Option<u8> {
        match self {
            Position::On(square) => Some(square),
            Position::Off => None,
        }
    }

    /// True if this is the borne-off state.
    #[must_use]
    pub const fn is_off(self) -> bool {
        matches!(self, Position::Off)
    }
}

/// A single playing piece: its identity, side, and current position.
///
/// `Piece` is a small `Copy` value; queries hand out copies rather than
/// references into the board, so a held `Piece` can go stale after a move.
/// Re-query through `Game::piece` when in doubt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub position: Position,
}

impl Piece {
    /// Create a piece on the given square.
    #[must_use]
    pub const fn new(id: PieceId, side: Side, square: u8) -> Self {
        Self {
            id,
            side,
            position: Position::On(square),
        }
    }

    /// The square this piece occupies, or `None` if borne off.
    #[must_use]
    pub const fn square(&self) -> Option<u8> {
        self.position.square()
    }

    /// True if this piece has been borne off.
    #[must_use]
    pub const fn is_off_board(&self) -> bool {
        self.position.is_off()
    }
}
