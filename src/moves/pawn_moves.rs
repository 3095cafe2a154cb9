//! Pawn movement: pushes, the double step from the start row, diagonal
//! captures and en passant.

use crate::game_state::{chess_types::*, position::Position};

/// Movement pattern of the pawn standing on `src`. False if `src` holds no
/// pawn.
pub fn pawn_geometry_ok(position: &Position, src: Square, dst: Square) -> bool {
    let Some(pawn) = position.piece_at(src) else {
        return false;
    };
    let side = pawn.side;
    let dir = side.forward();
    let d_row = dst.row - src.row;
    let d_col = dst.col - src.col;

    if d_col == 0 {
        if d_row == dir {
            return position.is_empty(dst);
        }
        if d_row == 2 * dir && src.row == side.pawn_start_row() {
            return position.is_empty(src.offset(dir, 0)) && position.is_empty(dst);
        }
        return false;
    }

    if d_row != dir || d_col.abs() != 1 {
        return false;
    }

    match position.piece_at(dst) {
        Some(target) => target.side != side,
        None => is_en_passant_capture(position, src, dst, side),
    }
}

/// Diagonal step onto the square skipped by an opposing pawn's double
/// advance, made immediately after that advance.
pub fn is_en_passant_capture(position: &Position, src: Square, dst: Square, side: Side) -> bool {
    if !position.last_move_was_double_pawn_advance {
        return false;
    }
    let Some(last_to) = position.last_move_to else {
        return false;
    };

    let lands_behind = dst.col == last_to.col && dst.row == last_to.row + side.forward();
    let adjacent = last_to.row == src.row && (last_to.col - src.col).abs() == 1;
    let victim_present =
        position.piece_at(last_to) == Some(Piece::new(PieceKind::Pawn, side.opposite()));

    lands_behind && adjacent && victim_present && position.is_empty(dst)
}

/// Squares a pawn of `side` on `src` attacks, regardless of what stands
/// there.
#[inline]
pub fn pawn_attacks_square(side: Side, src: Square, target: Square) -> bool {
    target.row - src.row == side.forward() && (target.col - src.col).abs() == 1
}
