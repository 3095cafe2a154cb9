use crate::game_state::{chess_types::Square, position::Position};
use crate::moves::sliding_paths::path_is_clear;

#[inline]
pub fn rook_geometry_ok(position: &Position, src: Square, dst: Square) -> bool {
    let same_row = src.row == dst.row;
    let same_col = src.col == dst.col;
    same_row != same_col && path_is_clear(position, src, dst)
}
