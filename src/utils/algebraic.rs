//! Square conversions for algebraic coordinates.
//!
//! Files a-h map to columns 0-7 left to right; ranks 8 down to 1 map to rows
//! 0-7 top to bottom.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> EngineResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(EngineError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(EngineError::InvalidSquare(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok(Square::new(row, col))
}

/// File letter of an on-board column. Callers check the bounds first.
#[inline]
pub(crate) fn file_char(col: i8) -> char {
    char::from(b'a' + col as u8)
}

/// Rank digit of an on-board row. Callers check the bounds first.
#[inline]
pub(crate) fn rank_char(row: i8) -> char {
    char::from(b'8' - row as u8)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> EngineResult<String> {
    if !square.is_on_board() {
        return Err(EngineError::InvalidSquare(format!(
            "({}, {})",
            square.row, square.col
        )));
    }
    Ok(format!("{}{}", file_char(square.col), rank_char(square.row)))
}

/// Test shorthand for a known-good square name.
#[cfg(test)]
pub(crate) fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("test square name should parse")
}
