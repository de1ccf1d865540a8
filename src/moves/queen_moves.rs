//! Queen move rules: the union of rook and bishop rules.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_move_is_pseudo_legal;
use crate::moves::rook_moves::rook_move_is_pseudo_legal;
use crate::moves::slide_candidate_squares;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
pub fn queen_move_is_pseudo_legal(from: Square, to: Square) -> bool {
    rook_move_is_pseudo_legal(from, to) || bishop_move_is_pseudo_legal(from, to)
}

/// Ray-scan destinations in all eight directions.
pub fn queen_candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    slide_candidate_squares(game_state, from, &QUEEN_DIRECTIONS)
}
