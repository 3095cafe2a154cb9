//! Crate root module declarations for the plum_rules chess engine.
//!
//! Exposes the rules core (board model, piece geometry, legality, game state
//! with undo/redo), the alpha-beta search, pluggable engines and utility
//! helpers so binaries, benches and external front ends share stable paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod move_record;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_geometry;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_paths;
}

pub mod move_generation {
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod match_harness;
    pub mod move_text;
    pub mod render_game_state;
}
