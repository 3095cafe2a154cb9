//! Engine abstraction used by the match harness and the self-play binary.
//!
//! Engines see a read-only [`Game`] and answer with a move for the side to
//! move; the caller commits it. Options are plain strings so a front end can
//! forward them without knowing each engine's settings.

use crate::errors::EngineResult;
use crate::game_state::chess_types::MovePair;
use crate::game_state::game::Game;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Unknown option names are ignored; known names with bad values fail
    /// with `EngineError::InvalidOption`.
    fn set_option(&mut self, _name: &str, _value: &str) -> EngineResult<()> {
        Ok(())
    }

    /// Move for the side to move, or `None` when it has no legal move.
    fn choose_move(&mut self, game: &Game) -> EngineResult<Option<MovePair>>;
}
