//! Static material evaluation.
//!
//! Scores are always from White's point of view: positive favors White,
//! negative favors Black. White is the maximizing side during search.

use crate::game_state::{chess_types::*, position::Position};

/// Magnitude returned when the side to move is checkmated at a search leaf.
pub const MATE_SCORE: i32 = 30000;

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// White material minus Black material.
pub fn evaluate(position: &Position) -> i32 {
    let mut score = 0i32;
    for square in Square::all() {
        if let Some(piece) = position.piece_at(square) {
            let value = piece_value(piece.kind);
            match piece.side {
                Side::White => score += value,
                Side::Black => score -= value,
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::game_state::position::Position;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&Position::new_game()), 0);
    }

    #[test]
    fn material_edge_is_signed_for_white() {
        // White is up a rook, Black has an extra knight and pawn.
        let position =
            Position::from_fen("4k3/3np3/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate(&position), 10 - 4);

        let flipped =
            Position::from_fen("r3k2r/8/8/8/8/8/3NP3/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(evaluate(&flipped), -6);
    }

    #[test]
    fn kings_carry_no_material() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
        assert_eq!(evaluate(&position), 0);
    }
}
