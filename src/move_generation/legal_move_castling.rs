use crate::game_state::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_square_attacked;

/// Castling preconditions for `side`'s king moving from `src` to `dst`.
///
/// The king and the chosen rook must be on their home squares and unmoved,
/// the squares between them empty, and the king may not stand on, pass
/// through or land on an attacked square.
pub fn is_castling_valid(position: &Position, src: Square, dst: Square, side: Side) -> bool {
    let home = king_home(side);
    if src != home || dst.row != home.row || (dst.col - src.col).abs() != 2 {
        return false;
    }
    if position.piece_at(src) != Some(Piece::new(PieceKind::King, side)) {
        return false;
    }
    if position.castling.king_moved[side.index()] {
        return false;
    }

    let kingside = dst.col > src.col;
    let rook_square = if kingside {
        kingside_rook_home(side)
    } else {
        queenside_rook_home(side)
    };
    if position.castling.rook_moved(side, kingside)
        || position.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, side))
    {
        return false;
    }

    let (low, high) = if kingside {
        (src.col, rook_square.col)
    } else {
        (rook_square.col, src.col)
    };
    if ((low + 1)..high).any(|col| !position.is_empty(Square::new(home.row, col))) {
        return false;
    }

    let step = if kingside { 1 } else { -1 };
    let opponent = side.opposite();
    let mut col = src.col;
    loop {
        if is_square_attacked(position, Square::new(home.row, col), opponent) {
            return false;
        }
        if col == dst.col {
            break;
        }
        col += step;
    }

    true
}
