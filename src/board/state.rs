//! Board state: the sparse square-to-piece mapping and its rule queries.

use rustc_hash::FxHashMap;

use crate::core::piece::{Piece, Position};
use crate::core::side::Side;

use super::squares::{self, FIRST_SQUARE, LAST_SQUARE, REBIRTH_SQUARE};

/// The thirty-square board.
///
/// A sparse mapping from square to the piece occupying it; occupancy is
/// exclusive. Pieces on the board live in this map and nowhere else; a
/// placed piece's `position` field is rewritten to match its key, which is
/// what keeps the occupancy invariant trivially true.
///
/// The board answers all square-level rule questions (safety, water, blocks,
/// protected pairs) but knows nothing about turns or rolls; that is the
/// game's job.
///
/// ## Usage
///
/// ```
/// use senet_engine::{Board, Piece, PieceId, Side};
///
/// let mut board = Board::new();
/// board.place(Piece::new(PieceId::new(0), Side::Dark, 1), 10);
///
/// assert!(board.is_occupied(10));
/// assert_eq!(board.piece_at(10).unwrap().square(), Some(10));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    squares: FxHashMap<u8, Piece>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a piece occupies the square.
    #[must_use]
    pub fn is_occupied(&self, square: u8) -> bool {
        self.squares.contains_key(&square)
    }

    /// The piece at the square, if any.
    #[must_use]
    pub fn piece_at(&self, square: u8) -> Option<Piece> {
        self.squares.get(&square).copied()
    }

    /// Place a piece on a square, overwriting any occupant.
    ///
    /// The piece's stored position is rewritten to match the square.
    ///
    /// Panics if the square is off the path.
    pub fn place(&mut self, mut piece: Piece, square: u8) {
        assert!(
            squares::is_on_board(square),
            "square {square} is off the path"
        );
        piece.position = Position::On(square);
        self.squares.insert(square, piece);
    }

    /// Remove and return the piece on a square.
    pub fn remove(&mut self, square: u8) -> Option<Piece> {
        self.squares.remove(&square)
    }

    /// True if the square holds a piece of the given side.
    #[must_use]
    pub fn is_friendly(&self, square: u8, side: Side) -> bool {
        self.squares.get(&square).is_some_and(|p| p.side == side)
    }

    /// True for the capture-immune squares 26, 28 and 29.
    #[must_use]
    pub fn is_safe_square(&self, square: u8) -> bool {
        squares::is_safe_square(square)
    }

    /// True for the House of Water (27).
    #[must_use]
    pub fn is_water_square(&self, square: u8) -> bool {
        squares::is_water_square(square)
    }

    /// True if a block of three same-side pieces starts at the square.
    ///
    /// A block is three consecutive occupied squares; it cannot start past
    /// square 28.
    #[must_use]
    pub fn is_block_at(&self, square: u8, side: Side) -> bool {
        if square < FIRST_SQUARE || square > LAST_SQUARE - 2 {
            return false;
        }
        (square..=square + 2).all(|s| self.is_friendly(s, side))
    }

    /// True if the piece on the square has a same-side neighbor at +-1.
    ///
    /// Such pairs protect each other from capture. False for an empty
    /// square.
    #[must_use]
    pub fn is_protected_group(&self, square: u8) -> bool {
        let Some(center) = self.piece_at(square) else {
            return false;
        };

        (square > FIRST_SQUARE && self.is_friendly(square - 1, center.side))
            || self.is_friendly(square + 1, center.side)
    }

    /// True if any square in `(from, to]` starts an opponent block.
    ///
    /// Blocks stop a piece from passing over them, not just landing on
    /// them, so the whole span is scanned. `to` may point past the board
    /// (a bear-off target); blocks cannot start there anyway.
    #[must_use]
    pub fn has_opponent_block_between(&self, from: u8, to: u8, opponent: Side) -> bool {
        if to <= from {
            return false;
        }
        (from + 1..=to).any(|s| self.is_block_at(s, opponent))
    }

    /// Where a piece landing on the water is reborn.
    ///
    /// The House of Rebirth (15) if empty, otherwise the lowest empty
    /// square in 1-14. `None` if every candidate is occupied; the move is
    /// then illegal.
    #[must_use]
    pub fn water_redirect(&self) -> Option<u8> {
        if !self.is_occupied(REBIRTH_SQUARE) {
            return Some(REBIRTH_SQUARE);
        }
        (FIRST_SQUARE..REBIRTH_SQUARE).find(|&s| !self.is_occupied(s))
    }

    /// Count a side's pieces on the board.
    #[must_use]
    pub fn count_on_board(&self, side: Side) -> usize {
        self.squares.values().filter(|p| p.side == side).count()
    }

    /// Iterate the board's pieces in square order, 1 to 30.
    ///
    /// This order defines "encounter order" everywhere a first-wins rule
    /// applies, matching a walk along the path.
    pub fn pieces_in_order(&self) -> impl Iterator<Item = Piece> + '_ {
        (FIRST_SQUARE..=LAST_SQUARE).filter_map(|s| self.piece_at(s))
    }

    /// A read-only copy of the full mapping, for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> FxHashMap<u8, Piece> {
        self.squares.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::PieceId;

    fn piece(id: u8, side: Side, square: u8) -> Piece {
        Piece::new(PieceId::new(id), side, square)
    }

    #[test]
    fn test_place_rewrites_position() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 3), 7);

        let placed = board.piece_at(7).unwrap();
        assert_eq!(placed.square(), Some(7));
        assert!(!board.is_occupied(3));
    }

    #[test]
    fn test_remove() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 5), 5);

        let removed = board.remove(5).unwrap();
        assert_eq!(removed.id, PieceId::new(0));
        assert!(!board.is_occupied(5));
        assert!(board.remove(5).is_none());
    }

    #[test]
    #[should_panic(expected = "off the path")]
    fn test_place_off_path_panics() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 1), 31);
    }

    #[test]
    fn test_friendly() {
        let mut board = Board::new();
        board.place(piece(0, Side::Dark, 12), 12);

        assert!(board.is_friendly(12, Side::Dark));
        assert!(!board.is_friendly(12, Side::Light));
        assert!(!board.is_friendly(13, Side::Dark));
    }

    #[test]
    fn test_block_detection() {
        let mut board = Board::new();
        board.place(piece(0, Side::Dark, 12), 12);
        board.place(piece(1, Side::Dark, 13), 13);
        board.place(piece(2, Side::Dark, 14), 14);

        assert!(board.is_block_at(12, Side::Dark));
        assert!(!board.is_block_at(13, Side::Dark));
        assert!(!board.is_block_at(12, Side::Light));
    }

    #[test]
    fn test_block_interrupted_by_opponent() {
        let mut board = Board::new();
        board.place(piece(0, Side::Dark, 12), 12);
        board.place(piece(1, Side::Light, 13), 13);
        board.place(piece(2, Side::Dark, 14), 14);

        assert!(!board.is_block_at(12, Side::Dark));
    }

    #[test]
    fn test_block_cannot_start_past_28() {
        let mut board = Board::new();
        board.place(piece(0, Side::Dark, 29), 29);
        board.place(piece(1, Side::Dark, 30), 30);

        assert!(!board.is_block_at(29, Side::Dark));
        assert!(!board.is_block_at(30, Side::Dark));
    }

    #[test]
    fn test_protected_group() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 8), 8);
        board.place(piece(1, Side::Light, 9), 9);
        board.place(piece(2, Side::Dark, 11), 11);

        assert!(board.is_protected_group(8));
        assert!(board.is_protected_group(9));
        assert!(!board.is_protected_group(11));
        assert!(!board.is_protected_group(10));
    }

    #[test]
    fn test_opponent_neighbor_does_not_protect() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 8), 8);
        board.place(piece(1, Side::Dark, 9), 9);

        assert!(!board.is_protected_group(8));
        assert!(!board.is_protected_group(9));
    }

    #[test]
    fn test_block_between_spans_passing() {
        let mut board = Board::new();
        board.place(piece(0, Side::Dark, 14), 14);
        board.place(piece(1, Side::Dark, 15), 15);
        board.place(piece(2, Side::Dark, 16), 16);

        // Passing over the block is stopped, not just landing on it.
        assert!(board.has_opponent_block_between(12, 18, Side::Dark));
        assert!(board.has_opponent_block_between(13, 14, Side::Dark));
        // A span ending before the block is clear.
        assert!(!board.has_opponent_block_between(10, 13, Side::Dark));
        // Degenerate span.
        assert!(!board.has_opponent_block_between(14, 14, Side::Dark));
    }

    #[test]
    fn test_water_redirect_prefers_rebirth() {
        let board = Board::new();
        assert_eq!(board.water_redirect(), Some(15));
    }

    #[test]
    fn test_water_redirect_scans_low_squares() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 15), 15);
        board.place(piece(1, Side::Light, 1), 1);
        board.place(piece(2, Side::Dark, 2), 2);

        assert_eq!(board.water_redirect(), Some(3));
    }

    #[test]
    fn test_water_redirect_saturated() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 15), 15);
        for (i, square) in (1..15).enumerate() {
            board.place(piece(i as u8 + 1, Side::Dark, square), square);
        }

        assert_eq!(board.water_redirect(), None);
    }

    #[test]
    fn test_count_and_order() {
        let mut board = Board::new();
        board.place(piece(0, Side::Dark, 22), 22);
        board.place(piece(1, Side::Light, 3), 3);
        board.place(piece(2, Side::Dark, 9), 9);

        assert_eq!(board.count_on_board(Side::Dark), 2);
        assert_eq!(board.count_on_board(Side::Light), 1);

        let order: Vec<_> = board.pieces_in_order().map(|p| p.square().unwrap()).collect();
        assert_eq!(order, vec![3, 9, 22]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new();
        board.place(piece(0, Side::Light, 4), 4);

        let snapshot = board.snapshot();
        board.remove(4);

        assert!(snapshot.contains_key(&4));
        assert!(!board.is_occupied(4));
    }
}
