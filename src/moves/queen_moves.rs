use crate::game_state::{chess_types::Square, position::Position};
use crate::moves::bishop_moves::bishop_geometry_ok;
use crate::moves::rook_moves::rook_geometry_ok;

#[inline]
pub fn queen_geometry_ok(position: &Position, src: Square, dst: Square) -> bool {
    bishop_geometry_ok(position, src, dst) || rook_geometry_ok(position, src, dst)
}
