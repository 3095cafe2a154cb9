//! Board snapshot used by the rules and by search.
//!
//! `Position` is a plain `Copy` value: the grid, the side to move, castling
//! flags and the last-move memory needed for en passant. Trying a move means
//! copying the position and mutating the copy; nothing is shared between
//! copies. Move history lives one level up, in [`Game`](crate::game_state::game::Game).

use crate::errors::EngineResult;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::utils::fen_parser::parse_fen;

/// The six one-way castling flags, indexed by [`Side::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingFlags {
    pub king_moved: [bool; 2],
    pub kingside_rook_moved: [bool; 2],
    pub queenside_rook_moved: [bool; 2],
}

impl CastlingFlags {
    /// Flags for a position where no castling is possible at all.
    pub const fn all_moved() -> Self {
        Self {
            king_moved: [true; 2],
            kingside_rook_moved: [true; 2],
            queenside_rook_moved: [true; 2],
        }
    }

    /// Marks every flag whose home square is the origin or the destination of
    /// a move. Moving off a home square means the piece has moved; landing on
    /// a rook's home square captures that rook.
    pub fn note_move(&mut self, from: Square, to: Square) {
        for side in [Side::White, Side::Black] {
            let i = side.index();
            let touches = |home: Square| from == home || to == home;
            if touches(king_home(side)) {
                self.king_moved[i] = true;
            }
            if touches(kingside_rook_home(side)) {
                self.kingside_rook_moved[i] = true;
            }
            if touches(queenside_rook_home(side)) {
                self.queenside_rook_moved[i] = true;
            }
        }
    }

    #[inline]
    pub fn rook_moved(&self, side: Side, kingside: bool) -> bool {
        if kingside {
            self.kingside_rook_moved[side.index()]
        } else {
            self.queenside_rook_moved[side.index()]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Side,
    pub castling: CastlingFlags,
    pub last_move_from: Option<Square>,
    pub last_move_to: Option<Square>,
    pub last_move_was_double_pawn_advance: bool,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// An empty board, White to move, no castling rights.
    pub fn empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Side::White,
            castling: CastlingFlags::all_moved(),
            last_move_from: None,
            last_move_to: None,
            last_move_was_double_pawn_advance: false,
        }
    }

    /// Standard 32-piece starting layout with all rights intact.
    pub fn new_game() -> Self {
        let mut position = Self::empty();
        position.castling = CastlingFlags::default();
        for side in [Side::White, Side::Black] {
            let back = side.back_row() as usize;
            let pawns = side.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                position.board[back][col] = Some(Piece::new(*kind, side));
                position.board[pawns][col] = Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        parse_fen(fen)
    }

    /// Occupant of `square`; `None` for empty and off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Places (or clears) a square. Off-board squares are ignored.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.board[square.row as usize][square.col as usize] = piece;
        }
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        Square::all().find(|sq| self.piece_at(*sq) == Some(Piece::new(PieceKind::King, side)))
    }

    /// Squares holding `side`'s pieces, row-major.
    pub fn occupied_by(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.side == side => Some((sq, piece)),
            _ => None,
        })
    }

    /// Builds the history entry for moving `moved` from `from` to `to`.
    /// Performs no legality check.
    pub fn describe_move(
        &self,
        moved: Piece,
        from: Square,
        to: Square,
        promote_to: PieceKind,
    ) -> MoveRecord {
        let captured = self.piece_at(to);
        let is_pawn = moved.kind == PieceKind::Pawn;
        let was_en_passant = is_pawn && from.col != to.col && captured.is_none();
        let was_castling = moved.kind == PieceKind::King && (to.col - from.col).abs() == 2;
        let was_promotion = is_pawn && to.row == moved.side.promotion_row();

        MoveRecord {
            from,
            to,
            moved,
            captured,
            was_en_passant,
            was_castling,
            was_promotion,
            promoted_to: was_promotion.then_some(promote_to),
        }
    }

    /// Copy of this position with the piece on `from` moved to `to`,
    /// promoting to a queen. `None` if `from` is empty.
    pub fn make_move(&self, from: Square, to: Square) -> Option<Position> {
        let moved = self.piece_at(from)?;
        let record = self.describe_move(moved, from, to, PieceKind::Queen);
        let mut next = *self;
        next.apply_record(&record);
        Some(next)
    }

    /// Applies every effect of `record` in place: capture (including the
    /// en-passant victim), castling rook, promotion, rights, last-move memory
    /// and the turn.
    pub fn apply_record(&mut self, record: &MoveRecord) {
        let mut piece = record.moved;
        self.set_piece(record.from, None);

        if record.was_en_passant {
            self.set_piece(record.en_passant_victim_square(), None);
        } else if record.was_castling {
            let (rook_from, rook_to) = castling_rook_cols(record.to.col);
            let row = record.from.row;
            let rook = self.piece_at(Square::new(row, rook_from));
            self.set_piece(Square::new(row, rook_from), None);
            self.set_piece(Square::new(row, rook_to), rook);
        }

        if record.was_promotion {
            piece.kind = record.promoted_to.unwrap_or(PieceKind::Queen);
        }
        self.set_piece(record.to, Some(piece));

        self.castling.note_move(record.from, record.to);
        self.remember_last_move(Some(record));
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverses the board effects of `record` and hands the turn back.
    /// Castling flags and last-move memory are left to the caller, which
    /// derives them from the remaining history.
    pub fn revert_record(&mut self, record: &MoveRecord) {
        self.set_piece(record.from, Some(record.moved));
        self.set_piece(record.to, record.captured);

        if record.was_en_passant {
            let victim = Piece::new(PieceKind::Pawn, record.moved.side.opposite());
            self.set_piece(record.en_passant_victim_square(), Some(victim));
        } else if record.was_castling {
            let (rook_from, rook_to) = castling_rook_cols(record.to.col);
            let row = record.from.row;
            let rook = self.piece_at(Square::new(row, rook_to));
            self.set_piece(Square::new(row, rook_to), None);
            self.set_piece(Square::new(row, rook_from), rook);
        }

        self.side_to_move = self.side_to_move.opposite();
    }

    /// Sets the en-passant memory from the most recent move, or clears it.
    pub fn remember_last_move(&mut self, record: Option<&MoveRecord>) {
        match record {
            Some(record) => {
                self.last_move_from = Some(record.from);
                self.last_move_to = Some(record.to);
                self.last_move_was_double_pawn_advance = record.is_double_pawn_advance();
            }
            None => {
                self.last_move_from = None;
                self.last_move_to = None;
                self.last_move_was_double_pawn_advance = false;
            }
        }
    }
}
