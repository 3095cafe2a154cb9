//! Game state machine: a position plus its move history.
//!
//! `Game` owns the current [`Position`], the history of committed moves, the
//! redo stack and the snapshot the game started from. Castling flags and
//! en-passant memory are never restored from saved copies on undo; they are
//! recomputed from the starting snapshot and the remaining history, so they
//! cannot drift from the moves that produced them.

use log::debug;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator;
use crate::utils::move_text::move_to_text;

/// Outcome check for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Check(Side),
    Checkmate { loser: Side },
    Stalemate(Side),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::Checkmate { .. } | Self::Stalemate(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    initial: Position,
    history: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game from the standard starting layout.
    pub fn new() -> Self {
        Self::from_position(Position::new_game())
    }

    /// Game starting from an arbitrary snapshot.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            initial: position,
            history: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Replaces everything with a fresh standard game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Legal destinations of the piece on `src` (move hints for a UI).
    pub fn legal_destinations(&self, src: Square) -> Vec<Square> {
        legal_move_generator::legal_destinations(&self.position, src)
    }

    /// Whether the side to move may play `src` → `dst`.
    #[inline]
    pub fn is_legal(&self, src: Square, dst: Square) -> bool {
        legal_move_generator::is_legal(&self.position, src, dst, self.position.side_to_move)
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        legal_move_checks::is_in_check(&self.position, side)
    }

    #[inline]
    pub fn is_checkmate(&self, side: Side) -> bool {
        legal_move_checks::is_checkmate(&self.position, side)
    }

    #[inline]
    pub fn is_stalemate(&self, side: Side) -> bool {
        legal_move_checks::is_stalemate(&self.position, side)
    }

    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move();
        let in_check = self.is_in_check(side);
        let can_move = legal_move_generator::has_any_legal_move(&self.position, side);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate { loser: side },
            (false, false) => GameStatus::Stalemate(side),
            (true, true) => GameStatus::Check(side),
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Plays `src` → `dst` for the side to move, promoting to a queen.
    pub fn apply_move(&mut self, src: Square, dst: Square) -> EngineResult<MoveRecord> {
        self.apply_move_promoting(src, dst, PieceKind::Queen)
    }

    /// Plays `src` → `dst` for the side to move after re-validating it.
    /// Rejected moves leave the game untouched.
    pub fn apply_move_promoting(
        &mut self,
        src: Square,
        dst: Square,
        promote_to: PieceKind,
    ) -> EngineResult<MoveRecord> {
        if promote_to != PieceKind::Queen {
            return Err(EngineError::UnsupportedPromotion(promote_to));
        }

        let mover = self.position.side_to_move;
        if !legal_move_generator::is_legal(&self.position, src, dst, mover) {
            return Err(EngineError::IllegalMove { from: src, to: dst });
        }
        let moved = self
            .position
            .piece_at(src)
            .ok_or(EngineError::IllegalMove { from: src, to: dst })?;

        let record = self.position.describe_move(moved, src, dst, promote_to);
        self.position.apply_record(&record);
        self.history.push(record);
        self.redo_stack.clear();

        debug!("applied {} for {:?}", move_to_text(&record), mover);
        Ok(record)
    }

    /// Takes back the most recent move.
    pub fn undo_last_move(&mut self) -> EngineResult<MoveRecord> {
        let record = self.history.pop().ok_or(EngineError::NothingToUndo)?;
        self.position.revert_record(&record);
        self.rederive_from_history();
        self.redo_stack.push(record);

        debug!("undid {}", move_to_text(&record));
        Ok(record)
    }

    /// Replays the most recently undone move with its recorded flags.
    pub fn redo_move(&mut self) -> EngineResult<MoveRecord> {
        let record = self.redo_stack.pop().ok_or(EngineError::NothingToRedo)?;
        self.position.apply_record(&record);
        self.history.push(record);
        self.rederive_from_history();

        debug!("redid {}", move_to_text(&record));
        Ok(record)
    }

    /// History rendered as `"Ng1 to f3"`-style strings, oldest first.
    pub fn move_history_strings(&self) -> Vec<String> {
        self.history.iter().map(move_to_text).collect()
    }

    fn rederive_from_history(&mut self) {
        let mut castling = self.initial.castling;
        for record in &self.history {
            castling.note_move(record.from, record.to);
        }
        self.position.castling = castling;

        match self.history.last() {
            Some(last) => self.position.remember_last_move(Some(last)),
            None => {
                self.position.last_move_from = self.initial.last_move_from;
                self.position.last_move_to = self.initial.last_move_to;
                self.position.last_move_was_double_pawn_advance =
                    self.initial.last_move_was_double_pawn_advance;
            }
        }
    }
}
