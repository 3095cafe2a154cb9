//! Attack detection and the check / checkmate / stalemate predicates.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::moves::move_geometry::attacks_square;

/// True iff some piece of `attacker` attacks `square`. King safety of the
/// attacker is not considered.
pub fn is_square_attacked(position: &Position, square: Square, attacker: Side) -> bool {
    position
        .occupied_by(attacker)
        .any(|(src, piece)| src != square && attacks_square(position, piece, src, square))
}

/// True iff `side`'s king stands on an attacked square. A board without that
/// king is never in check.
#[inline]
pub fn is_in_check(position: &Position, side: Side) -> bool {
    let Some(king_sq) = position.king_square(side) else {
        return false;
    };
    is_square_attacked(position, king_sq, side.opposite())
}

pub fn is_checkmate(position: &Position, side: Side) -> bool {
    is_in_check(position, side) && !has_any_legal_move(position, side)
}

pub fn is_stalemate(position: &Position, side: Side) -> bool {
    !is_in_check(position, side) && !has_any_legal_move(position, side)
}
