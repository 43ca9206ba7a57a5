//! The thirty-square board: square classification and piece placement.

pub mod squares;
pub mod state;

pub use squares::{
    FIRST_SQUARE, HOME_ROW_LAST, LAST_SQUARE, REBIRTH_SQUARE, SAFE_SQUARES, WATER_SQUARE,
};
pub use state::Board;
