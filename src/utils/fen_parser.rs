//! FEN-to-Position parser.
//!
//! Builds a position from a Forsyth-Edwards Notation string: piece layout,
//! side to move, castling flags and en-passant memory. The halfmove and
//! fullmove clocks are optional and validated but not stored, since the
//! position model carries no clocks.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::{CastlingFlags, Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> EngineResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("bad move clock '{clock}'")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::empty();
    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling = parse_castling_rights(castling_part)?;
    parse_en_passant_square(en_passant_part, &mut position)?;

    Ok(position)
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidFen(message.to_owned())
}

fn parse_board(board_part: &str, position: &mut Position) -> EngineResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as i8;
                if col > BOARD_SIZE {
                    return Err(invalid("rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if col >= BOARD_SIZE {
                return Err(invalid("rank has too many files"));
            }

            position.set_piece(Square::new(row as i8, col), Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> EngineResult<Side> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(invalid(&format!("invalid side-to-move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> EngineResult<CastlingFlags> {
    let mut flags = CastlingFlags::all_moved();
    if castling_part == "-" {
        return Ok(flags);
    }

    for ch in castling_part.chars() {
        let (side, kingside) = match ch {
            'K' => (Side::White, true),
            'Q' => (Side::White, false),
            'k' => (Side::Black, true),
            'q' => (Side::Black, false),
            _ => return Err(invalid(&format!("invalid castling character '{ch}'"))),
        };
        flags.king_moved[side.index()] = false;
        if kingside {
            flags.kingside_rook_moved[side.index()] = false;
        } else {
            flags.queenside_rook_moved[side.index()] = false;
        }
    }

    Ok(flags)
}

/// The en-passant field names the skipped square; it is stored as the double
/// advance that produced it.
fn parse_en_passant_square(en_passant_part: &str, position: &mut Position) -> EngineResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let skipped = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en-passant square '{en_passant_part}'")))?;
    let pawn_side = position.side_to_move.opposite();
    if skipped.row != pawn_side.pawn_start_row() + pawn_side.forward() {
        return Err(invalid(&format!(
            "en-passant square '{en_passant_part}' is on the wrong rank"
        )));
    }

    position.last_move_from = Some(skipped.offset(-pawn_side.forward(), 0));
    position.last_move_to = Some(skipped.offset(pawn_side.forward(), 0));
    position.last_move_was_double_pawn_advance = true;
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else if ch.is_ascii_lowercase() {
        Side::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, side))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::EngineError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::sq;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn starting_fen_matches_new_game() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&position));

        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn en_passant_field_becomes_last_double_advance() {
        let position = parse_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 2").expect("FEN should parse");
        assert_eq!(position.last_move_from, Some(sq("e7")));
        assert_eq!(position.last_move_to, Some(sq("e5")));
        assert!(position.last_move_was_double_pawn_advance);
        assert_eq!(position.castling.king_moved, [true, true]);
    }

    #[test]
    fn clocks_are_optional() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K2R w K").expect("short FEN should parse");
        assert!(!position.castling.king_moved[Side::White.index()]);
        assert!(!position.castling.kingside_rook_moved[Side::White.index()]);
        assert!(position.castling.queenside_rook_moved[Side::White.index()]);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(EngineError::InvalidFen(_))
        ));
        assert!(parse_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/7X w - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1").is_err());
    }

    #[test]
    fn rejects_overlong_ranks() {
        assert_eq!(
            parse_fen("8888888888888888/8/8/8/8/8/8/8 w - - 0 1"),
            Err(EngineError::InvalidFen("rank has too many files".to_owned()))
        );
        assert!(parse_fen("44/8/8/8/8/8/8/8 w - - 0 1").is_ok());
        assert!(parse_fen("71/8/8/8/8/8/8/8 w - - 0 1").is_ok());
        assert!(parse_fen("72/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("8k/8/8/8/8/8/8/8 w - - 0 1").is_err());
    }
}
