//! Bishop movement: any distance along a diagonal, stopped by the first
//! occupied square.

use crate::game_state::{chess_types::Square, position::Position};
use crate::moves::sliding_paths::path_is_clear;

#[inline]
pub fn bishop_geometry_ok(position: &Position, src: Square, dst: Square) -> bool {
    let d_row = (dst.row - src.row).abs();
    let d_col = (dst.col - src.col).abs();
    d_row == d_col && d_row != 0 && path_is_clear(position, src, dst)
}
