//! Authoritative legal-move relation.
//!
//! `is_legal` composes bounds, ownership, friendly fire, piece geometry and
//! castling preconditions with a king-safety probe on a copied position.
//! Enumeration is always row-major by source, then by destination; search
//! and tie-breaking depend on that order.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_castling::is_castling_valid;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::king_moves::is_castling_shape;
use crate::moves::move_geometry::geometry_ok;

/// Whether `mover` may play `src` → `dst` in `position`. Never errors;
/// anything inapplicable, off-board included, is simply `false`.
pub fn is_legal(position: &Position, src: Square, dst: Square, mover: Side) -> bool {
    if !src.is_on_board() || !dst.is_on_board() {
        return false;
    }

    let Some(piece) = position.piece_at(src) else {
        return false;
    };
    if piece.side != mover {
        return false;
    }
    if position.piece_at(dst).is_some_and(|target| target.side == mover) {
        return false;
    }

    let pattern_ok = if piece.kind == PieceKind::King && is_castling_shape(mover, src, dst) {
        is_castling_valid(position, src, dst, mover)
    } else {
        geometry_ok(position, piece.kind, src, dst)
    };
    if !pattern_ok {
        return false;
    }

    // Probe the full result, en-passant removal and rook relocation included.
    let record = position.describe_move(piece, src, dst, PieceKind::Queen);
    let mut next = *position;
    next.apply_record(&record);
    !is_in_check(&next, mover)
}

/// Legal destinations for the piece on `src`, moving for its own side.
/// Empty for an empty or off-board square.
pub fn legal_destinations(position: &Position, src: Square) -> Vec<Square> {
    match position.piece_at(src) {
        Some(piece) => legal_destinations_for(position, src, piece.side),
        None => Vec::new(),
    }
}

/// Legal destinations from `src` for `mover`, row-major.
pub fn legal_destinations_for(position: &Position, src: Square, mover: Side) -> Vec<Square> {
    Square::all()
        .filter(|dst| is_legal(position, src, *dst, mover))
        .collect()
}

/// Every legal `(src, dst)` pair for `side`, row-major by source then by
/// destination.
pub fn legal_moves(position: &Position, side: Side) -> Vec<MovePair> {
    let mut moves = Vec::with_capacity(48);
    for (src, _) in position.occupied_by(side) {
        for dst in Square::all() {
            if is_legal(position, src, dst, side) {
                moves.push((src, dst));
            }
        }
    }
    moves
}

/// Short-circuiting existence check used by mate and stalemate detection.
pub fn has_any_legal_move(position: &Position, side: Side) -> bool {
    position
        .occupied_by(side)
        .any(|(src, _)| Square::all().any(|dst| is_legal(position, src, dst, side)))
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, is_legal, legal_destinations, legal_moves};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::sq;

    #[test]
    fn start_position_has_twenty_moves() {
        let position = Position::new_game();
        let moves = legal_moves(&position, Side::White);
        assert_eq!(moves.len(), 20);
        assert_eq!(legal_moves(&position, Side::Black).len(), 20);

        let knight_moves = moves
            .iter()
            .filter(|(src, _)| position.piece_at(*src).map(|p| p.kind) == Some(PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn enumeration_is_row_major() {
        let position = Position::new_game();
        let moves = legal_moves(&position, Side::White);
        // a2 (row 6) comes before b1 (row 7); destinations ascend within a source.
        assert_eq!(moves[0], (sq("a2"), sq("a4")));
        assert_eq!(moves[1], (sq("a2"), sq("a3")));
        assert_eq!(moves[16], (sq("b1"), sq("a3")));
        assert_eq!(moves[17], (sq("b1"), sq("c3")));
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(sorted, moves);
    }

    #[test]
    fn basic_rejections() {
        let position = Position::new_game();
        assert!(!is_legal(&position, Square::new(8, 0), sq("a3"), Side::White));
        assert!(!is_legal(&position, sq("a2"), Square::new(-1, 0), Side::White));
        assert!(!is_legal(&position, sq("e4"), sq("e5"), Side::White));
        assert!(!is_legal(&position, sq("e7"), sq("e5"), Side::White));
        assert!(!is_legal(&position, sq("a1"), sq("a2"), Side::White));
        assert!(is_legal(&position, sq("e7"), sq("e5"), Side::Black));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // The e2 knight shields its king from the e8 rook.
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN");
        assert!(legal_destinations(&position, sq("e2")).is_empty());
        for dst in legal_destinations(&position, sq("e1")) {
            assert_ne!(dst.col, 4, "king may not stay on the open file");
        }
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let position = Position::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
        let dests = legal_destinations(&position, sq("e1"));
        assert!(!dests.contains(&sq("d1")));
        assert!(!dests.contains(&sq("d2")));
        assert!(dests.contains(&sq("f1")));
        assert!(dests.contains(&sq("e2")));
    }

    #[test]
    fn en_passant_exposing_king_on_rank_is_illegal() {
        // Removing both pawns from the fifth rank would open the h5 rook onto a5.
        let position = Position::from_fen("8/8/8/KPp4r/8/8/8/6k1 w - c6 0 2").expect("FEN");
        assert!(!is_legal(&position, sq("b5"), sq("c6"), Side::White));
        assert!(is_legal(&position, sq("b5"), sq("b6"), Side::White));
    }

    #[test]
    fn castling_appears_among_king_destinations() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN");
        let dests = legal_destinations(&position, sq("e1"));
        assert!(dests.contains(&sq("g1")));
        assert!(dests.contains(&sq("c1")));
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let position = Position::new_game();
        assert!(legal_destinations(&position, sq("e4")).is_empty());
        assert!(legal_destinations(&position, Square::new(9, 9)).is_empty());
        assert!(has_any_legal_move(&position, Side::White));
    }
}
