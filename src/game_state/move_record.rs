use crate::game_state::chess_types::*;

/// One entry of the move history; enough to reverse or replay the move
/// without consulting the rules again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece that moved, as it stood before any promotion.
    pub moved: Piece,
    /// Pre-move content of `to`. Stays `None` for en passant; the victim
    /// pawn is rebuilt from `was_en_passant` on undo.
    pub captured: Option<Piece>,
    pub was_en_passant: bool,
    pub was_castling: bool,
    pub was_promotion: bool,
    pub promoted_to: Option<PieceKind>,
}

impl MoveRecord {
    #[inline]
    pub fn is_double_pawn_advance(&self) -> bool {
        self.moved.kind == PieceKind::Pawn && (self.to.row - self.from.row).abs() == 2
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::new(self.from.row, self.to.col)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.was_en_passant
    }
}
