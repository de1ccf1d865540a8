//! Rook move rules.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::slide_candidate_squares;
use crate::utils::algebraic::{col_of, row_of};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rank/file geometry only; blockers are checked separately with
/// `empty_squares_between`.
#[inline]
pub fn rook_move_is_pseudo_legal(from: Square, to: Square) -> bool {
    from != to && (row_of(from) == row_of(to) || col_of(from) == col_of(to))
}

/// Ray-scan destinations in the four rook directions.
pub fn rook_candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    slide_candidate_squares(game_state, from, &ROOK_DIRECTIONS)
}
