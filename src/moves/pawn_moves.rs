//! Pawn move rules: pushes, double pushes, captures, and en passant.
//!
//! Capture geometry is exposed separately from the move predicate because
//! attack detection must not require a victim on the target square.

use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{col_of, on_board, row_of, square_at};

/// Diagonal capture geometry for a pawn of `color`, regardless of whether
/// anything stands on the target square.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Square, to: Square) -> bool {
    let row_delta = row_of(to) as i8 - row_of(from) as i8;
    let col_diff = (col_of(to) as i8 - col_of(from) as i8).abs();
    row_delta == color.forward_row() && col_diff == 1
}

/// Full pawn move predicate: pushes need empty squares, diagonals need an
/// opposing piece or the en-passant target.
pub fn pawn_move_is_pseudo_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    let Some(piece) = game_state.piece_on(from) else {
        return false;
    };
    let color = piece.color;
    let forward = color.forward_row();

    // Captures, en passant included.
    if pawn_attacks_square(color, from, to) {
        return game_state.color_on(to) == Some(color.opposite())
            || game_state.en_passant_square == Some(to);
    }

    if col_of(from) != col_of(to) {
        return false;
    }
    let row_delta = row_of(to) as i8 - row_of(from) as i8;

    // Single push onto an empty square.
    if row_delta == forward {
        return game_state.piece_on(to).is_none();
    }

    // Double push from the home row through two empty squares.
    if row_delta == 2 * forward && row_of(from) == pawn_home_row(color) {
        let step = square_at((row_of(from) as i8 + forward) as u8, col_of(from));
        return game_state.piece_on(step).is_none() && game_state.piece_on(to).is_none();
    }

    false
}

/// Push and capture destinations for the pawn on `from`.
pub fn pawn_candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.piece_on(from) else {
        return Vec::new();
    };
    let color = piece.color;
    let forward = color.forward_row();
    let row = row_of(from) as i8;
    let col = col_of(from) as i8;

    let mut candidates = Vec::with_capacity(4);

    if on_board(row + forward, col) {
        let step = square_at((row + forward) as u8, col as u8);
        if game_state.piece_on(step).is_none() {
            candidates.push(step);

            if row as u8 == pawn_home_row(color) {
                let double = square_at((row + 2 * forward) as u8, col as u8);
                if game_state.piece_on(double).is_none() {
                    candidates.push(double);
                }
            }
        }
    }

    for col_delta in [-1i8, 1] {
        if !on_board(row + forward, col + col_delta) {
            continue;
        }
        let target = square_at((row + forward) as u8, (col + col_delta) as u8);
        if game_state.color_on(target) == Some(color.opposite())
            || game_state.en_passant_square == Some(target)
        {
            candidates.push(target);
        }
    }

    candidates
}
