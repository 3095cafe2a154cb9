use crate::game_state::chess_types::Square;

/// Knight jump: (2,1) or (1,2) in any sign combination. Never blocked.
#[inline]
pub fn knight_geometry_ok(src: Square, dst: Square) -> bool {
    let d_row = (dst.row - src.row).abs();
    let d_col = (dst.col - src.col).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
