//! GameState-to-FEN serialization.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{square_at, square_to_algebraic};

/// The four state-carrying FEN fields: placement, side, castling, en passant.
///
/// This is the key the opening book indexes positions by; two states with
/// equal keys are interchangeable for every rule in the engine.
pub fn position_key(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_run = 0u8;

        for col in 0..8u8 {
            match game_state.piece_on(square_at(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out.push(' ');
    if game_state.castling_rights == 0 {
        out.push('-');
    } else {
        if game_state.castling_rights & CASTLE_LIGHT_KINGSIDE != 0 {
            out.push('K');
        }
        if game_state.castling_rights & CASTLE_LIGHT_QUEENSIDE != 0 {
            out.push('Q');
        }
        if game_state.castling_rights & CASTLE_DARK_KINGSIDE != 0 {
            out.push('k');
        }
        if game_state.castling_rights & CASTLE_DARK_QUEENSIDE != 0 {
            out.push('q');
        }
    }

    out.push(' ');
    match game_state
        .en_passant_square
        .and_then(|sq| square_to_algebraic(sq).ok())
    {
        Some(text) => out.push_str(&text),
        None => out.push('-'),
    }

    out
}

/// Full six-field FEN. The engine keeps no clocks, so the halfmove clock
/// and fullmove number are emitted as `0 1`.
pub fn generate_fen(game_state: &GameState) -> String {
    format!("{} 0 1", position_key(game_state))
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_round_trips() {
        let game_state = GameState::new_game();
        assert_eq!(generate_fen(&game_state), STARTING_POSITION_FEN);
    }

    #[test]
    fn sparse_position_round_trips() {
        let fen = "8/8/4k3/8/2Pp4/8/4K3/8 b - c3 0 1";
        let game_state = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&game_state), fen);
    }
}
