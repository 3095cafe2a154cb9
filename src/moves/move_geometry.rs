//! Per-kind movement patterns, dispatched over [`PieceKind`].
//!
//! `geometry_ok` answers "does this piece's pattern allow src → dst on this
//! board?" without looking at turn order, friendly fire or king safety.
//! `attacks_square` is the variant used for attack detection.

use crate::game_state::{chess_types::*, position::Position};
use crate::moves::bishop_moves::bishop_geometry_ok;
use crate::moves::king_moves::{is_castling_shape, king_step_ok};
use crate::moves::knight_moves::knight_geometry_ok;
use crate::moves::pawn_moves::{pawn_attacks_square, pawn_geometry_ok};
use crate::moves::queen_moves::queen_geometry_ok;
use crate::moves::rook_moves::rook_geometry_ok;

/// Movement pattern check for a piece of `kind` standing on `src`.
///
/// A king's two-file move on its home row passes here as the castling shape;
/// its preconditions are the legality engine's job.
pub fn geometry_ok(position: &Position, kind: PieceKind, src: Square, dst: Square) -> bool {
    match kind {
        PieceKind::Pawn => pawn_geometry_ok(position, src, dst),
        PieceKind::Knight => knight_geometry_ok(src, dst),
        PieceKind::Bishop => bishop_geometry_ok(position, src, dst),
        PieceKind::Rook => rook_geometry_ok(position, src, dst),
        PieceKind::Queen => queen_geometry_ok(position, src, dst),
        PieceKind::King => {
            king_step_ok(src, dst)
                || position
                    .piece_at(src)
                    .is_some_and(|king| is_castling_shape(king.side, src, dst))
        }
    }
}

/// Whether `piece` on `src` attacks `target`.
///
/// Pawns attack their forward diagonals whether or not anything stands
/// there, and a king never attacks through castling.
pub fn attacks_square(position: &Position, piece: Piece, src: Square, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(piece.side, src, target),
        PieceKind::King => king_step_ok(src, target),
        kind => geometry_ok(position, kind, src, target),
    }
}
