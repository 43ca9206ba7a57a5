//! The automated opponent's turn loop.
//!
//! The opponent always plays the Dark side and drives the game exactly as a
//! human caller would: roll, inspect, move, repeat while the turn lasts.
//! Reroll and carry-over chains are walked with an explicit loop rather
//! than recursion, so the control flow stays bounded and analyzable.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::side::Side;
use crate::game::Game;

use super::policy::{select_piece, Difficulty};

/// Hard cap on moves within one `take_turn` call. A legal reroll chain is
/// far shorter; the cap is a safety net against rule-interaction bugs.
const MAX_TURN_STEPS: u32 = 64;

/// What a turn step left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The same side still holds the turn (reroll or carry-over).
    MoveAgain,
    /// The turn has passed to the other side.
    TurnEnded,
    /// The game ended during the turn.
    GameOver,
}

/// An automated Dark-side player.
///
/// Owns its own RNG (for the Easy tier's random choice) so a seeded
/// opponent replays identically against scripted dice.
#[derive(Clone, Debug)]
pub struct AiOpponent {
    difficulty: Difficulty,
    rng: GameRng,
}

impl AiOpponent {
    /// Create an opponent with a deterministic selection RNG.
    #[must_use]
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: GameRng::new(seed),
        }
    }

    /// Create an opponent seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: GameRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Play out one full Dark turn: roll, move, and keep going while
    /// rerolls or carry-overs hold the turn.
    ///
    /// Returns immediately when it is not Dark's turn to roll.
    pub fn take_turn(&mut self, game: &mut Game) -> TurnOutcome {
        for _ in 0..MAX_TURN_STEPS {
            match self.step(game) {
                TurnOutcome::MoveAgain => continue,
                done => return done,
            }
        }
        TurnOutcome::TurnEnded
    }

    /// One roll-and-move step.
    fn step(&mut self, game: &mut Game) -> TurnOutcome {
        if game.game_over() {
            return TurnOutcome::GameOver;
        }
        if game.active_side() != Side::Dark {
            return TurnOutcome::TurnEnded;
        }

        game.roll();

        if !game.move_pending() {
            // The throw was consumed without a move to make: a start-
            // protocol roll, or an auto-skip. Dark keeping the turn means
            // it gets to throw again.
            return if game.active_side() == Side::Dark {
                TurnOutcome::MoveAgain
            } else {
                TurnOutcome::TurnEnded
            };
        }

        let pieces = game.get_valid_pieces(Side::Dark);
        if pieces.is_empty() {
            game.skip_turn();
            return TurnOutcome::TurnEnded;
        }

        let piece = select_piece(self.difficulty, game, &pieces, &mut self.rng);
        if !game.move_piece(piece.id) {
            // A piece from the valid list must move; forfeit rather than
            // spin if that ever fails to hold.
            game.skip_turn();
            return TurnOutcome::TurnEnded;
        }

        if game.game_over() {
            return TurnOutcome::GameOver;
        }
        if game.active_side() == Side::Dark {
            TurnOutcome::MoveAgain
        } else {
            TurnOutcome::TurnEnded
        }
    }
}
