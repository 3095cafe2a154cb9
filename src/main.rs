//! Self-play runner: the alpha-beta engine (White) against the random engine.
//!
//! Run with:
//! `cargo run --release -- --depth 2 --plies 120 --seed 7 --opening 4`
//! `cargo run --release -- --verbose`

use std::process::ExitCode;

use env_logger::Env;
use log::error;

use plum_rules::engines::engine_minimax::MinimaxEngine;
use plum_rules::engines::engine_random::RandomEngine;
use plum_rules::engines::engine_trait::Engine;
use plum_rules::errors::{EngineError, EngineResult};
use plum_rules::search::alpha_beta::SearchConfig;
use plum_rules::utils::match_harness::{play_engine_match, MatchConfig};
use plum_rules::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy)]
struct Args {
    depth: u8,
    plies: u16,
    seed: u64,
    opening: u8,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            depth: SearchConfig::default().depth,
            plies: MatchConfig::default().max_plies,
            seed: 0,
            opening: MatchConfig::default().opening_plies,
            verbose: false,
        }
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: Option<String>) -> EngineResult<T> {
    let value = value.unwrap_or_default();
    value.trim().parse::<T>().map_err(|_| EngineError::InvalidOption {
        name: name.to_owned(),
        value,
    })
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> EngineResult<Args> {
    let mut args = Args::default();
    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--depth" => args.depth = parse_value("--depth", raw.next())?,
            "--plies" => args.plies = parse_value("--plies", raw.next())?,
            "--seed" => args.seed = parse_value("--seed", raw.next())?,
            "--opening" => args.opening = parse_value("--opening", raw.next())?,
            "--verbose" | "-v" => args.verbose = true,
            other => {
                return Err(EngineError::InvalidOption {
                    name: other.to_owned(),
                    value: String::new(),
                })
            }
        }
    }
    Ok(args)
}

fn run(args: Args) -> EngineResult<()> {
    let mut white = MinimaxEngine::new(SearchConfig { depth: args.depth });
    let mut black = RandomEngine::default();
    black.set_option("Seed", &args.seed.to_string())?;

    let result = play_engine_match(
        &mut white,
        &mut black,
        MatchConfig {
            max_plies: args.plies,
            seed: args.seed,
            opening_plies: args.opening,
        },
    )?;

    for (ply, text) in result.moves.iter().enumerate() {
        if ply % 2 == 0 {
            print!("{:>3}. {text:<12}", ply / 2 + 1);
        } else {
            println!("{text}");
        }
    }
    if result.moves.len() % 2 == 1 {
        println!();
    }
    println!();
    println!("{}", render_game_state(result.final_game.position()));
    println!("outcome: {:?}", result.outcome);
    Ok(())
}

fn main() -> ExitCode {
    let parsed = parse_args(std::env::args().skip(1));
    let verbose = parsed.as_ref().map(|a| a.verbose).unwrap_or(false);
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match parsed.and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
