//! Piece-selection policies, one per difficulty tier.
//!
//! Policies read the game only through its public query surface; nothing
//! here can see or touch state a human player could not.

use serde::{Deserialize, Serialize};

use crate::board::squares::LAST_SQUARE;
use crate::core::piece::Piece;
use crate::core::rng::GameRng;
use crate::game::Game;

/// How strong an opponent to field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random among the movable pieces.
    Easy,
    /// The movable piece closest to the exit.
    Medium,
    /// One-ply heuristic: prefer bearing off, then capturing.
    Hard,
}

/// Select the piece to move for the given tier.
///
/// `pieces` must be non-empty and in encounter (square) order; ties in the
/// Hard tier go to the first piece.
#[must_use]
pub fn select_piece(
    difficulty: Difficulty,
    game: &Game,
    pieces: &[Piece],
    rng: &mut GameRng,
) -> Piece {
    assert!(!pieces.is_empty(), "no pieces to select from");

    match difficulty {
        Difficulty::Easy => *rng.choose(pieces).unwrap_or(&pieces[0]),
        Difficulty::Medium => pieces
            .iter()
            .max_by_key(|p| p.square().unwrap_or(0))
            .copied()
            .unwrap_or(pieces[0]),
        Difficulty::Hard => {
            let mut best = pieces[0];
            let mut best_score = -1;
            for &piece in pieces {
                let score = score_piece(game, &piece);
                if score > best_score {
                    best_score = score;
                    best = piece;
                }
            }
            best
        }
    }
}

/// Hard-tier score for a piece: +10 if its move would bear it off, +5 if
/// its forward destination holds a capturable enemy.
fn score_piece(game: &Game, piece: &Piece) -> i32 {
    let Some(from) = piece.square() else {
        return 0;
    };
    let to = from + game.last_roll();
    let mut score = 0;

    if to > LAST_SQUARE && game.can_bear_off(piece) {
        score += 10;
    }
    if to <= LAST_SQUARE {
        if let Some(enemy) = game.board().piece_at(to) {
            if enemy.side != piece.side
                && !game.board().is_safe_square(to)
                && !game.board().is_protected_group(to)
            {
                score += 5;
            }
        }
    }

    score
}
