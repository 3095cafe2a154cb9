//! Uniform random-move engine.
//!
//! Used as a sparring partner for the search engine and for diagnostics.
//! Seeded so matches are reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::MovePair;
use crate::game_state::game::Game;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    seed: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Random"
    }

    /// Restarts the move sequence from the configured seed.
    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        if name.eq_ignore_ascii_case("Seed") {
            self.seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| EngineError::InvalidOption {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            self.rng = StdRng::seed_from_u64(self.seed);
        }
        Ok(())
    }

    fn choose_move(&mut self, game: &Game) -> EngineResult<Option<MovePair>> {
        let moves = legal_moves(game.position(), game.side_to_move());
        Ok(moves.as_slice().choose(&mut self.rng).copied())
    }
}
