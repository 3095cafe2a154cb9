//! Fixed-depth alpha-beta engine over material evaluation.

use log::debug;

use crate::engines::engine_trait::Engine;
use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::game_state::game::Game;
use crate::search::alpha_beta::{search_best_move, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        if name.eq_ignore_ascii_case("Depth") {
            self.config.depth = value
                .trim()
                .parse::<u8>()
                .map_err(|_| EngineError::InvalidOption {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
        }
        Ok(())
    }

    fn choose_move(&mut self, game: &Game) -> EngineResult<Option<MovePair>> {
        let result = search_best_move(game.position(), game.side_to_move(), self.config);
        Ok(result.best_move)
    }
}

/// Searches for `side` and plays the result on `game`.
///
/// `Ok(None)` means `side` had no legal move and the game is unchanged. An
/// error means the chosen move could not be applied, for example because
/// `side` is not the side to move.
pub fn commit_best_move(game: &mut Game, side: Side, depth: u8) -> EngineResult<Option<MovePair>> {
    let result = search_best_move(game.position(), side, SearchConfig { depth });
    let Some((src, dst)) = result.best_move else {
        debug!("no move available for {:?}", side);
        return Ok(None);
    };
    game.apply_move(src, dst)?;
    Ok(Some((src, dst)))
}

#[cfg(test)]
mod tests {
    use super::{commit_best_move, MinimaxEngine};
    use crate::engines::engine_trait::Engine;
    use crate::errors::EngineError;
    use crate::game_state::chess_types::*;
    use crate::game_state::game::{Game, GameStatus};
    use crate::search::alpha_beta::SearchConfig;
    use crate::utils::algebraic::sq;

    #[test]
    fn commit_applies_the_chosen_move() {
        let mut game = Game::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN");
        let played = commit_best_move(&mut game, Side::White, 1).expect("search should run");
        assert_eq!(played, Some((sq("d2"), sq("d5"))));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.side_to_move(), Side::Black);
    }

    #[test]
    fn commit_without_moves_leaves_game_unchanged() {
        let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN");
        let before = game.clone();
        assert_eq!(commit_best_move(&mut game, Side::Black, 2), Ok(None));
        assert_eq!(game, before);
    }

    #[test]
    fn commit_for_wrong_side_is_an_error() {
        let mut game = Game::new();
        let err = commit_best_move(&mut game, Side::Black, 0).expect_err("white to move");
        assert!(matches!(err, EngineError::IllegalMove { .. }));
        assert!(game.history().is_empty());
    }

    #[test]
    fn engine_delivers_mate_in_one() {
        let mut game = Game::from_fen("6k1/5Q2/6K1/8/8/8/8/8 w - - 0 1").expect("FEN");
        let mut engine = MinimaxEngine::new(SearchConfig { depth: 1 });
        let (src, dst) = engine
            .choose_move(&game)
            .expect("search should run")
            .expect("moves exist");
        game.apply_move(src, dst).expect("engine move is legal");
        assert_eq!(game.status(), GameStatus::Checkmate { loser: Side::Black });
    }

    #[test]
    fn depth_option() {
        let mut engine = MinimaxEngine::default();
        assert_eq!(engine.depth(), 3);
        engine.set_option("depth", " 2 ").expect("valid depth");
        assert_eq!(engine.depth(), 2);
        assert!(matches!(
            engine.set_option("Depth", "-1"),
            Err(EngineError::InvalidOption { .. })
        ));
        assert_eq!(engine.depth(), 2);
    }
}
