//! Knight move rules.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{col_of, on_board, row_of, square_at};

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// Pure jump geometry; turn and destination occupancy are the caller's job.
#[inline]
pub fn knight_move_is_pseudo_legal(from: Square, to: Square) -> bool {
    let row_diff = (row_of(from) as i8 - row_of(to) as i8).abs();
    let col_diff = (col_of(from) as i8 - col_of(to) as i8).abs();
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}

/// All on-board jump destinations not occupied by the knight's own side.
pub fn knight_candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(color) = game_state.color_on(from) else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(8);
    for (row_delta, col_delta) in KNIGHT_JUMPS {
        let row = row_of(from) as i8 + row_delta;
        let col = col_of(from) as i8 + col_delta;
        if !on_board(row, col) {
            continue;
        }

        let to = square_at(row as u8, col as u8);
        if game_state.color_on(to) != Some(color) {
            candidates.push(to);
        }
    }

    candidates
}
