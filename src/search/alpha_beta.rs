//! Depth-bounded minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the material score from
//! [`evaluate`]. Children are visited in the legality engine's enumeration
//! order with no reordering, so results are fully deterministic and the
//! earliest-enumerated move wins ties at the root.

use log::{debug, trace};

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{evaluate, MATE_SCORE};

/// Window bound wider than any reachable score.
pub const INFINITY: i32 = 1_000_000;
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<MovePair>,
    pub best_score: i32,
    pub nodes: u64,
}

#[inline]
const fn side_for(maximizing: bool) -> Side {
    if maximizing {
        Side::White
    } else {
        Side::Black
    }
}

/// Score for a side with no legal moves: mated if in check, else drawn.
fn terminal_score(position: &Position, side: Side, maximizing: bool) -> i32 {
    if !is_in_check(position, side) {
        return 0;
    }
    if maximizing {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}

/// Alpha-beta value of `position` searched `depth` plies, White to move
/// when `maximizing`.
pub fn search(position: &Position, depth: u8, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    let mut nodes = 0u64;
    alpha_beta(position, depth, maximizing, alpha, beta, &mut nodes)
}

fn alpha_beta(
    position: &Position,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(position);
    }

    let side = side_for(maximizing);
    let moves = legal_moves(position, side);
    if moves.is_empty() {
        return terminal_score(position, side, maximizing);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for (src, dst) in moves {
        let Some(child) = position.make_move(src, dst) else {
            continue;
        };
        let score = alpha_beta(&child, depth - 1, !maximizing, alpha, beta, nodes);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

/// Unpruned minimax over the same tree as [`search`].
pub fn minimax(position: &Position, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 {
        return evaluate(position);
    }

    let side = side_for(maximizing);
    let moves = legal_moves(position, side);
    if moves.is_empty() {
        return terminal_score(position, side, maximizing);
    }

    let scores = moves
        .into_iter()
        .filter_map(|(src, dst)| position.make_move(src, dst))
        .map(|child| minimax(&child, depth - 1, !maximizing));
    if maximizing {
        scores.max().unwrap_or(-INFINITY)
    } else {
        scores.min().unwrap_or(INFINITY)
    }
}

/// Root search for `side`. Each candidate is scored by searching its child
/// `config.depth` plies with the opponent to move.
pub fn search_best_move(position: &Position, side: Side, config: SearchConfig) -> SearchResult {
    let maximizing = side == Side::White;
    let mut result = SearchResult {
        best_move: None,
        best_score: if maximizing { -INFINITY } else { INFINITY },
        nodes: 0,
    };
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;

    for (src, dst) in legal_moves(position, side) {
        let Some(child) = position.make_move(src, dst) else {
            continue;
        };
        let score = alpha_beta(
            &child,
            config.depth,
            !maximizing,
            alpha,
            beta,
            &mut result.nodes,
        );
        trace!("root candidate {:?} -> {:?} scored {}", src, dst, score);

        // Strict comparison keeps the earliest move on ties.
        let improves = if maximizing {
            score > result.best_score
        } else {
            score < result.best_score
        };
        if improves || result.best_move.is_none() {
            result.best_move = Some((src, dst));
            result.best_score = score;
        }
        if maximizing {
            alpha = alpha.max(result.best_score);
        } else {
            beta = beta.min(result.best_score);
        }
    }

    if result.best_move.is_none() {
        result.best_score = 0;
    }
    debug!(
        "search for {:?} at depth {}: best {:?} score {} nodes {}",
        side, config.depth, result.best_move, result.best_score, result.nodes
    );
    result
}

/// Best move for `side`, or `None` if it has no legal move.
#[inline]
pub fn select_best_move(position: &Position, side: Side, depth: u8) -> Option<MovePair> {
    search_best_move(position, side, SearchConfig { depth }).best_move
}
