//! AI opponent integration tests: full games of every difficulty tier
//! against a scripted human stand-in.

use senet_engine::{AiOpponent, Difficulty, Game, Side, TurnOutcome};

/// Alternate a first-valid-piece human (Light) with the AI (Dark) until the
/// game ends or the step budget runs out. Returns the finished game.
fn play_match(difficulty: Difficulty, seed: u64, max_steps: usize) -> Game {
    let mut game = Game::with_seed(seed);
    let mut ai = AiOpponent::new(difficulty, seed ^ 0x5eed);

    for _ in 0..max_steps {
        if game.game_over() {
            break;
        }

        if game.active_side() == Side::Dark {
            ai.take_turn(&mut game);
        } else {
            game.roll();
            if game.move_pending() {
                let pieces = game.get_valid_pieces(Side::Light);
                if pieces.is_empty() {
                    game.skip_turn();
                } else {
                    game.move_piece(pieces[0].id);
                }
            }
        }

        // The AI must never leave the engine in a half-stepped state.
        assert!(!game.move_pending() || game.active_side() == Side::Light);
        for side in Side::both() {
            assert_eq!(
                game.board().count_on_board(side) + game.borne_off(side).len(),
                5
            );
        }
    }

    game
}

#[test]
fn test_easy_match_is_well_formed() {
    let game = play_match(Difficulty::Easy, 1, 4000);
    if game.game_over() {
        let winner = game.winner().expect("winner set");
        assert_eq!(game.borne_off(winner).len(), 5);
    }
}

#[test]
fn test_medium_match_is_well_formed() {
    let game = play_match(Difficulty::Medium, 2, 4000);
    if game.game_over() {
        assert!(game.winner().is_some());
    }
}

#[test]
fn test_hard_match_is_well_formed() {
    let game = play_match(Difficulty::Hard, 3, 4000);
    if game.game_over() {
        assert!(game.winner().is_some());
    }
}

#[test]
fn test_seeded_matches_replay_identically() {
    let game1 = play_match(Difficulty::Hard, 77, 1500);
    let game2 = play_match(Difficulty::Hard, 77, 1500);

    assert_eq!(game1.board().snapshot(), game2.board().snapshot());
    assert_eq!(game1.active_side(), game2.active_side());
    assert_eq!(game1.last_roll(), game2.last_roll());
    assert_eq!(game1.winner(), game2.winner());
}

#[test]
fn test_ai_reports_game_over() {
    // Drive a long match; if the AI ends the game, its own turn must have
    // reported it.
    let mut game = Game::with_seed(5);
    let mut ai = AiOpponent::new(Difficulty::Medium, 5);

    for _ in 0..6000 {
        if game.game_over() {
            break;
        }
        if game.active_side() == Side::Dark {
            let outcome = ai.take_turn(&mut game);
            if game.game_over() {
                assert_eq!(outcome, TurnOutcome::GameOver);
                break;
            }
            assert_eq!(outcome, TurnOutcome::TurnEnded);
        } else {
            game.roll();
            if game.move_pending() {
                let pieces = game.get_valid_pieces(Side::Light);
                if pieces.is_empty() {
                    game.skip_turn();
                } else {
                    game.move_piece(pieces[0].id);
                }
            }
        }
    }
}
