//! Head-to-head engine match harness for local testing.
//!
//! Runs two [`Engine`] implementations against each other on a [`Game`],
//! with an optional seeded random opening prefix, and stops at checkmate,
//! stalemate or the ply limit.

use log::info;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::EngineResult;
use crate::game_state::chess_types::Side;
use crate::game_state::game::{Game, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Checkmate { loser: Side::White } => Some(Self::BlackWinCheckmate),
            GameStatus::Checkmate { loser: Side::Black } => Some(Self::WhiteWinCheckmate),
            GameStatus::Stalemate(_) => Some(Self::DrawStalemate),
            GameStatus::InProgress | GameStatus::Check(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Engine plies played before the game is scored a draw.
    pub max_plies: u16,
    /// Seed for the random opening prefix.
    pub seed: u64,
    pub opening_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            opening_plies: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_game: Game,
    /// Every move of the game, opening prefix included, as history text.
    pub moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

/// Plays a match from the standard starting position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    play_engine_match_from_game(Game::new(), engine_white, engine_black, config)
}

/// Plays a match continuing from `game`.
pub fn play_engine_match_from_game(
    mut game: Game,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    apply_seeded_random_opening(&mut game, config.seed, config.opening_plies)?;

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut outcome = MatchOutcome::from_status(game.status());

    for _ in 0..config.max_plies {
        if outcome.is_some() {
            break;
        }

        let mover = game.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Side::White => &mut *engine_white,
            Side::Black => &mut *engine_black,
        };
        let Some((src, dst)) = engine.choose_move(&game)? else {
            break;
        };
        game.apply_move(src, dst)?;

        match mover {
            Side::White => white_move_count = white_move_count.saturating_add(1),
            Side::Black => black_move_count = black_move_count.saturating_add(1),
        }
        outcome = MatchOutcome::from_status(game.status());
    }

    let outcome = outcome.unwrap_or(MatchOutcome::DrawMaxPlies);
    info!(
        "{} (White) vs {} (Black): {:?} after {} plies",
        engine_white.name(),
        engine_black.name(),
        outcome,
        game.history().len()
    );

    Ok(MatchResult {
        outcome,
        moves: game.move_history_strings(),
        final_game: game,
        white_move_count,
        black_move_count,
    })
}

/// Plays up to `plies` uniformly random legal moves, stopping early if the
/// game ends.
fn apply_seeded_random_opening(game: &mut Game, seed: u64, plies: u8) -> EngineResult<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = legal_moves(game.position(), game.side_to_move());
        let Some((src, dst)) = moves.as_slice().choose(&mut rng).copied() else {
            break;
        };
        game.apply_move(src, dst)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, play_engine_match_from_game, MatchConfig, MatchOutcome};
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::game::Game;
    use crate::search::alpha_beta::SearchConfig;

    #[test]
    fn random_match_is_reproducible_and_bounded() {
        let config = MatchConfig {
            max_plies: 30,
            seed: 5,
            opening_plies: 4,
        };
        let run = || {
            let mut white = RandomEngine::new(1);
            let mut black = RandomEngine::new(2);
            play_engine_match(&mut white, &mut black, config).expect("match should run")
        };
        let first = run();
        let second = run();

        assert_eq!(first.moves, second.moves);
        assert_eq!(first.outcome, second.outcome);
        assert!(first.moves.len() <= 34);
        assert!(first.white_move_count + first.black_move_count <= 30);
        assert_eq!(first.moves, first.final_game.move_history_strings());
    }

    #[test]
    fn minimax_finishes_mate_in_one() {
        let game = Game::from_fen("6k1/5Q2/6K1/8/8/8/8/8 w - - 0 1").expect("FEN");
        let mut white = MinimaxEngine::new(SearchConfig { depth: 1 });
        let mut black = RandomEngine::new(0);
        let result = play_engine_match_from_game(game, &mut white, &mut black, MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.white_move_count, 1);
        assert_eq!(result.black_move_count, 0);
        assert_eq!(result.moves.len(), 1);
    }

    #[test]
    fn finished_game_is_scored_without_moves() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN");
        let mut white = RandomEngine::new(0);
        let mut black = RandomEngine::new(0);
        let result = play_engine_match_from_game(game, &mut white, &mut black, MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
        assert!(result.moves.is_empty());
    }
}
