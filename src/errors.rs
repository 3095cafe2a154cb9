//! Errors returned by the engine.
//!
//! Every failure here is recoverable: a rejected move leaves the game
//! untouched and the caller may simply try something else. Legality queries
//! (`is_legal`, `legal_destinations`) never error; they answer `false` or an
//! empty list for anything that does not apply.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested move failed re-validation against the current position.
    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Square, to: Square },

    /// Pawns only promote to a queen.
    #[error("unsupported promotion piece: {0:?}")]
    UnsupportedPromotion(PieceKind),

    #[error("no move to undo")]
    NothingToUndo,

    #[error("no undone move to redo")]
    NothingToRedo,

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOption { name: String, value: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
