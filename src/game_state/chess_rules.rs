//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed home squares that castling rights are tied
//! to. Coordinates follow the `(row, col)` convention of `chess_types`.

use crate::game_state::chess_types::{PieceKind, Side, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from file a to file h.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: i8 = 4;
pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const QUEENSIDE_ROOK_COL: i8 = 0;

#[inline]
pub const fn king_home(side: Side) -> Square {
    Square::new(side.back_row(), KING_HOME_COL)
}

#[inline]
pub const fn kingside_rook_home(side: Side) -> Square {
    Square::new(side.back_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_home(side: Side) -> Square {
    Square::new(side.back_row(), QUEENSIDE_ROOK_COL)
}

/// Rook origin and landing columns for a castling king moving to `king_dst_col`.
#[inline]
pub const fn castling_rook_cols(king_dst_col: i8) -> (i8, i8) {
    if king_dst_col > KING_HOME_COL {
        (KINGSIDE_ROOK_COL, king_dst_col - 1)
    } else {
        (QUEENSIDE_ROOK_COL, king_dst_col + 1)
    }
}
