//! The Senet state machine.
//!
//! A `Game` owns the board, the turn, the pending throw, and the phase
//! flags, and is mutated only through `roll`, `move_piece` and `skip_turn`.
//! Lifecycle: awaiting the start roll, then started (throw pending or move
//! pending), then over. Illegal requests are `false`/no-op results, never
//! errors; the rules themselves have no failure modes.
//!
//! ## Turn cadence
//!
//! A throw of 1, 4 or 6 keeps the turn; 2 or 3 passes it once the move
//! resolves. A bear-off that over-shoots square 30 leaves a remainder that
//! must be played out before the turn can end (the carry-over roll).

use smallvec::SmallVec;

use crate::board::squares::{FIRST_SQUARE, HOME_ROW_LAST, LAST_SQUARE, WATER_SQUARE};
use crate::board::Board;
use crate::core::dice::{DiceSource, StickDice};
use crate::core::piece::{Piece, PieceId, Position};
use crate::core::side::{Side, SideMap};

/// A game of Senet.
///
/// Created through [`GameBuilder`]; driven by `roll` and `move_piece`. All
/// state is readable through accessors, none of it writable from outside.
#[derive(Debug)]
pub struct Game {
    board: Board,
    borne_off: SideMap<Vec<Piece>>,
    active_side: Side,
    /// 0 until the first throw; rolled values are 1-6. 5 is only ever a
    /// bear-off remainder, the sticks cannot throw it.
    last_roll: u8,
    carry_over_roll: u8,
    dark_owner: Option<Side>,
    game_started: bool,
    awaiting_start_roll: bool,
    move_pending: bool,
    game_over: bool,
    winner: Option<Side>,
    dice: Box<dyn DiceSource>,
}

/// Builder for a [`Game`].
///
/// ## Example
///
/// ```
/// use senet_engine::{FixedDice, GameBuilder, Side};
///
/// let mut game = GameBuilder::new()
///     .starting_side(Side::Light)
///     .dice(FixedDice::new(&[1]))
///     .build();
///
/// // Light throws the 1, claims the dark pieces, and the dark piece on
/// // square 10 advances at once.
/// game.roll();
/// assert!(game.game_started());
/// assert_eq!(game.dark_owner(), Some(Side::Light));
/// assert_eq!(game.active_side(), Side::Dark);
/// ```
#[derive(Debug)]
pub struct GameBuilder {
    starting_side: Side,
    seed: Option<u64>,
    dice: Option<Box<dyn DiceSource>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            starting_side: Side::Light,
            seed: None,
            dice: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which side label throws first in the start protocol.
    pub fn starting_side(mut self, side: Side) -> Self {
        self.starting_side = side;
        self
    }

    /// Seed for the stick dice. Ignored when explicit dice are injected.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inject a dice source, e.g. `FixedDice` for scripted games.
    pub fn dice(mut self, dice: impl DiceSource + 'static) -> Self {
        self.dice = Some(Box::new(dice));
        self
    }

    /// Build the game in the canonical opening layout, awaiting the start
    /// roll.
    pub fn build(self) -> Game {
        let dice = self.dice.unwrap_or_else(|| match self.seed {
            Some(seed) => Box::new(StickDice::new(seed)),
            None => Box::new(StickDice::from_entropy()),
        });

        let mut board = Board::new();
        for square in FIRST_SQUARE..=HOME_ROW_LAST {
            // Alternating sides by square parity; square 10 is dark no
            // matter what.
            let side = if square == HOME_ROW_LAST {
                Side::Dark
            } else if square % 2 == 1 {
                Side::Light
            } else {
                Side::Dark
            };
            board.place(Piece::new(PieceId::new(square - 1), side, square), square);
        }

        Game {
            board,
            borne_off: SideMap::with_value(Vec::new()),
            active_side: self.starting_side,
            last_roll: 0,
            carry_over_roll: 0,
            dark_owner: None,
            game_started: false,
            awaiting_start_roll: true,
            move_pending: false,
            game_over: false,
            winner: None,
            dice,
        }
    }
}

impl Game {
    /// A new game with entropy-seeded stick dice.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// A new game with deterministically seeded stick dice.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }

    // === Roll lifecycle ===

    /// Throw the sticks.
    ///
    /// No-op returning the last throw once the game is over. A pending
    /// carry-over remainder is consumed in preference to a fresh throw.
    /// During the start protocol a 1 claims the dark pieces; any other
    /// value passes the throw to the other player. In normal play the
    /// throw arms `move_pending`, unless the active side has no legal move,
    /// in which case the side is auto-skipped on the spot (keeping the turn
    /// only when the throw grants a reroll).
    pub fn roll(&mut self) -> u8 {
        if self.game_over {
            return self.last_roll;
        }

        if self.carry_over_roll > 0 {
            self.last_roll = self.carry_over_roll;
            self.carry_over_roll = 0;
            self.move_pending = true;
            return self.last_roll;
        }

        let value = self.dice.roll();
        debug_assert!(matches!(value, 1..=4 | 6), "dice produced {value}");
        self.last_roll = value;

        if self.awaiting_start_roll {
            if value == 1 {
                self.claim_dark_pieces();
            } else {
                self.active_side = self.active_side.opponent();
            }
            return self.last_roll;
        }

        self.move_pending = true;
        if !self.has_any_valid_move(self.active_side) {
            // Auto-skip: the throw is consumed with nothing to play.
            self.move_pending = false;
            if !self.should_roll_again() {
                self.active_side = self.active_side.opponent();
            }
        }

        self.last_roll
    }

    /// The first 1 of the game: the roller takes ownership of the dark
    /// pieces, the turn color flips to Dark immediately (even when the
    /// Light label rolled it), and the throw is spent at once advancing the
    /// dark piece on square 10. A 1 grants the reroll, so Dark keeps the
    /// turn.
    fn claim_dark_pieces(&mut self) {
        self.dark_owner = Some(self.active_side);
        self.game_started = true;
        self.awaiting_start_roll = false;
        self.active_side = Side::Dark;

        if let Some(piece) = self.board.piece_at(HOME_ROW_LAST) {
            if piece.side == Side::Dark {
                self.move_piece(piece.id);
            }
        }
    }

    /// True if the last throw grants the same side another throw (1, 4, 6).
    #[must_use]
    pub fn should_roll_again(&self) -> bool {
        matches!(self.last_roll, 1 | 4 | 6)
    }

    /// Explicit forfeiture: clears the pending move and any carry-over and
    /// passes the turn. No-op once the game is over.
    pub fn skip_turn(&mut self) {
        if self.game_over {
            return;
        }
        self.move_pending = false;
        self.carry_over_roll = 0;
        self.active_side = self.active_side.opponent();
    }

    // === Move resolution ===

    /// Move a piece by the last throw: forward if legal, backward as the
    /// last resort.
    ///
    /// Returns `false` when the piece is stuck, off the board, or unknown,
    /// and when the game is over. A stuck piece still consumes the pending
    /// move; nothing else changes.
    pub fn move_piece(&mut self, id: PieceId) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.piece(id) else {
            return false;
        };
        let Some(from) = piece.square() else {
            return false;
        };

        if self.can_move_forward(&piece) {
            self.execute_move(piece, from + self.last_roll)
        } else if self.can_move_backward(&piece) {
            self.execute_move(piece, from - self.last_roll)
        } else {
            // A stuck piece still consumes the throw.
            self.move_pending = false;
            false
        }
    }

    /// Carry out a legal move to `to`, with all side effects: bear-off with
    /// remainder, water rebirth, capture swap, turn advance.
    fn execute_move(&mut self, piece: Piece, to: u8) -> bool {
        let Some(from) = piece.square() else {
            return false;
        };
        let mover = piece.side;
        self.board.remove(from);

        if to > LAST_SQUARE {
            return self.bear_off(piece, from);
        }

        // Water: the piece is reborn instead of landing, and a rebirth
        // square is always empty, so a redirected move never captures. An
        // enemy sitting on the water square itself survives.
        let to = if to == WATER_SQUARE {
            match self.board.water_redirect() {
                Some(square) => square,
                // Legality already required a destination; landing back on
                // the origin keeps execution total if that contract was
                // bypassed.
                None => from,
            }
        } else {
            to
        };

        if let Some(enemy) = self.board.piece_at(to) {
            if enemy.side != mover
                && !self.board.is_safe_square(to)
                && !self.board.is_protected_group(to)
            {
                // Capture swaps the enemy back to the mover's origin;
                // captured pieces never leave the board.
                self.board.remove(to);
                self.board.place(enemy, from);
            }
        }

        self.board.place(piece, to);
        self.move_pending = false;
        self.carry_over_roll = 0;
        self.end_turn();
        true
    }

    /// Take a piece off the board. The unused part of the throw becomes a
    /// carry-over that forces another move if the side can play it.
    fn bear_off(&mut self, mut piece: Piece, from: u8) -> bool {
        piece.position = Position::Off;
        self.borne_off[piece.side].push(piece);

        let used = LAST_SQUARE + 1 - from;
        let remainder = self.last_roll.saturating_sub(used);

        if remainder > 0 {
            // The remainder is the throw the forced move will play, so it
            // decides legality and, later, the reroll.
            self.last_roll = remainder;
            if self.has_any_valid_move(piece.side) {
                self.carry_over_roll = remainder;
                self.move_pending = true;
            } else {
                self.carry_over_roll = 0;
                self.move_pending = false;
                self.end_turn();
            }
        } else {
            self.carry_over_roll = 0;
            self.move_pending = false;
            self.end_turn();
        }

        self.check_win(piece.side);
        true
    }

    fn end_turn(&mut self) {
        if !self.should_roll_again() {
            self.active_side = self.active_side.opponent();
        }
    }

    /// Win check, run after every bear-off against the side that just
    /// moved (the turn may already have passed).
    fn check_win(&mut self, side: Side) {
        if self.board.count_on_board(side) == 0 {
            self.game_over = true;
            self.winner = Some(side);
            self.move_pending = false;
            self.carry_over_roll = 0;
        }
    }

    // === Legality ===

    /// Can this piece move forward by the last throw?
    ///
    /// Illegal onto a friendly square, through or onto an opponent block,
    /// onto a protected or safe-squared enemy, or into a saturated water
    /// trap. Past square 30 this is the bear-off precondition.
    #[must_use]
    pub fn can_move_forward(&self, piece: &Piece) -> bool {
        let Some(from) = piece.square() else {
            return false;
        };
        let to = from + self.last_roll;

        if to <= LAST_SQUARE && self.board.is_friendly(to, piece.side) {
            return false;
        }
        if self
            .board
            .has_opponent_block_between(from, to, piece.side.opponent())
        {
            return false;
        }
        if to > LAST_SQUARE {
            return self.can_bear_off(piece);
        }
        if let Some(target) = self.board.piece_at(to) {
            if target.side != piece.side
                && (self.board.is_safe_square(to) || self.board.is_protected_group(to))
            {
                return false;
            }
        }
        if to == WATER_SQUARE && self.board.water_redirect().is_none() {
            return false;
        }
        true
    }

    /// Can this piece move backward by the last throw?
    ///
    /// Backward movement is a last resort for the whole side: it is only
    /// open once no piece of the side has a legal forward move. The same
    /// landing restrictions as forward apply, but blocks do not stop
    /// backward passage.
    #[must_use]
    pub fn can_move_backward(&self, piece: &Piece) -> bool {
        let Some(from) = piece.square() else {
            return false;
        };
        if from == FIRST_SQUARE {
            return false;
        }
        if self.has_any_valid_move_forward(piece.side) {
            return false;
        }

        let Some(to) = from
            .checked_sub(self.last_roll)
            .filter(|&t| t >= FIRST_SQUARE)
        else {
            return false;
        };

        if self.board.is_friendly(to, piece.side) {
            return false;
        }
        if let Some(target) = self.board.piece_at(to) {
            if target.side != piece.side
                && (self.board.is_safe_square(to) || self.board.is_protected_group(to))
            {
                return false;
            }
        }
        if to == WATER_SQUARE && self.board.water_redirect().is_none() {
            return false;
        }
        true
    }

    /// Can this piece leave the board? Only once its side has fully
    /// cleared the home row (squares 1-10).
    #[must_use]
    pub fn can_bear_off(&self, piece: &Piece) -> bool {
        if piece.is_off_board() {
            return false;
        }
        !(FIRST_SQUARE..=HOME_ROW_LAST).any(|s| self.board.is_friendly(s, piece.side))
    }

    // === Queries ===

    /// All of a side's pieces with a legal forward or backward move, in
    /// square order.
    #[must_use]
    pub fn get_valid_pieces(&self, side: Side) -> SmallVec<[Piece; 5]> {
        // SmallVec keeps the at-most-five pieces off the heap.
        self.board
            .pieces_in_order()
            .filter(|p| p.side == side)
            .filter(|p| self.can_move_forward(p) || self.can_move_backward(p))
            .collect()
    }

    /// Does the side have any legal move at the current throw?
    #[must_use]
    pub fn has_any_valid_move(&self, side: Side) -> bool {
        self.board
            .pieces_in_order()
            .filter(|p| p.side == side)
            .any(|p| self.can_move_forward(&p) || self.can_move_backward(&p))
    }

    /// Does the side have any legal forward move at the current throw?
    #[must_use]
    pub fn has_any_valid_move_forward(&self, side: Side) -> bool {
        self.board
            .pieces_in_order()
            .filter(|p| p.side == side)
            .any(|p| self.can_move_forward(&p))
    }

    /// Convenience: any legal move for the active side.
    #[must_use]
    pub fn has_any_valid_moves(&self) -> bool {
        self.has_any_valid_move(self.active_side)
    }

    /// Look up a piece by id, on the board or borne off.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.board
            .pieces_in_order()
            .find(|p| p.id == id)
            .or_else(|| {
                self.borne_off
                    .iter()
                    .flat_map(|(_, pieces)| pieces.iter())
                    .find(|p| p.id == id)
                    .copied()
            })
    }

    // === Accessors ===

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A side's borne-off pieces, in bear-off order.
    #[must_use]
    pub fn borne_off(&self, side: Side) -> &[Piece] {
        &self.borne_off[side]
    }

    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    #[must_use]
    pub fn last_roll(&self) -> u8 {
        self.last_roll
    }

    #[must_use]
    pub fn carry_over_roll(&self) -> u8 {
        self.carry_over_roll
    }

    /// Which side label won the start roll and owns the dark pieces.
    #[must_use]
    pub fn dark_owner(&self) -> Option<Side> {
        self.dark_owner
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    #[must_use]
    pub fn awaiting_start_roll(&self) -> bool {
        self.awaiting_start_roll
    }

    #[must_use]
    pub fn move_pending(&self) -> bool {
        self.move_pending
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
