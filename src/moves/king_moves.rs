//! King movement: one step in any direction, plus the two-file castling
//! shape whose preconditions are checked by the legality engine.

use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::{Side, Square};

#[inline]
pub fn king_step_ok(src: Square, dst: Square) -> bool {
    let d_row = (dst.row - src.row).abs();
    let d_col = (dst.col - src.col).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// Two-file horizontal move from the king's home square along the back row.
#[inline]
pub fn is_castling_shape(side: Side, src: Square, dst: Square) -> bool {
    src.row == side.back_row()
        && dst.row == src.row
        && src.col == KING_HOME_COL
        && (dst.col - src.col).abs() == 2
}
