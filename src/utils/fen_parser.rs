//! FEN-to-GameState parser.
//!
//! Builds a mailbox position from a Forsyth-Edwards Notation string. Only
//! the first four fields carry state here; the halfmove clock and fullmove
//! number are accepted and ignored. Missing trailing fields fall back to
//! light to move, board-probed castling rights, and no en-passant target.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    castle_right_mask, king_home_square, rook_home_square, CastleSide,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("empty FEN".to_owned()))?;

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;

    game_state.side_to_move = match parts.next() {
        None => Color::Light,
        Some(side_part) => parse_side_to_move(side_part)?,
    };

    // Castling rights are first probed from the actual board, then narrowed
    // by the FEN field: an absent letter drops the corresponding right.
    game_state.castling_rights = probe_castling_rights(&game_state);
    if let Some(castling_part) = parts.next() {
        game_state.castling_rights &= parse_castling_rights(castling_part)?;
    }

    game_state.en_passant_square = match parts.next() {
        None => None,
        Some(en_passant_part) => parse_en_passant_square(en_passant_part)?,
    };

    // Halfmove clock and fullmove number, if present, carry no state.

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let mut square = 0usize;

    for ch in board_part.chars() {
        if ch == '/' {
            continue;
        }

        if let Some(step) = ch.to_digit(10) {
            square += step as usize;
            continue;
        }

        let piece = Piece::from_fen_char(ch).ok_or_else(|| {
            ChessErrors::InvalidFen(format!("invalid character '{ch}' in board layout"))
        })?;

        if square > 63 {
            return Err(ChessErrors::InvalidFen(
                "board layout exceeds 64 squares".to_owned(),
            ));
        }

        game_state.squares[square] = Some(piece);
        square += 1;
    }

    if square > 64 {
        return Err(ChessErrors::InvalidFen(
            "board layout exceeds 64 squares".to_owned(),
        ));
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

/// Rights implied by the physical position: king and rook still at home.
fn probe_castling_rights(game_state: &GameState) -> CastlingRights {
    let mut rights: CastlingRights = 0;

    for color in [Color::Light, Color::Dark] {
        let king_home = game_state.piece_on(king_home_square(color))
            == Some(Piece::new(color, PieceKind::King));
        if !king_home {
            continue;
        }

        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let rook_home = game_state.piece_on(rook_home_square(color, side))
                == Some(Piece::new(color, PieceKind::Rook));
            if rook_home {
                rights |= castle_right_mask(color, side);
            }
        }
    }

    rights
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessErrors::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
