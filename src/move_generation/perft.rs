//! Move-path enumeration for validating the legality engine.
//!
//! Promotions only go to a queen, so positions whose counts include
//! under-promotions will not match published tables at depths where those
//! occur.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Number of leaf positions `depth` plies below `position`, `side` to move.
pub fn perft(position: &Position, side: Side, depth: u8) -> u64 {
    perft_detailed(position, side, depth).nodes
}

pub fn perft_detailed(position: &Position, side: Side, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (src, dst) in legal_moves(position, side) {
        let Some(moved) = position.piece_at(src) else {
            continue;
        };
        let record = position.describe_move(moved, src, dst, PieceKind::Queen);
        let mut next = *position;
        next.apply_record(&record);

        if depth == 1 {
            total.merge(PerftCounts {
                nodes: 1,
                captures: u64::from(record.is_capture()),
                en_passant: u64::from(record.was_en_passant),
                castles: u64::from(record.was_castling),
                promotions: u64::from(record.was_promotion),
            });
        } else {
            total.merge(perft_detailed(&next, side.opposite(), depth - 1));
        }
    }

    total
}
