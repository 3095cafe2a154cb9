//! Human-readable move text for history display.
//!
//! Format: `<letter><from> to <to>`, for example `Ng1 to f3` or `e2 to e4`.
//! Pawns carry no letter; a promoting pawn is still written as a pawn move.

use crate::game_state::move_record::MoveRecord;
use crate::utils::algebraic::{file_char, rank_char};

pub fn move_to_text(record: &MoveRecord) -> String {
    let mut out = String::with_capacity(10);
    if let Some(letter) = record.moved.kind.letter() {
        out.push(letter);
    }
    out.push(file_char(record.from.col));
    out.push(rank_char(record.from.row));
    out.push_str(" to ");
    out.push(file_char(record.to.col));
    out.push(rank_char(record.to.row));
    out
}
