//! Bishop move rules.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::slide_candidate_squares;
use crate::utils::algebraic::{col_of, row_of};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal geometry only; blockers are checked separately with
/// `empty_squares_between`.
#[inline]
pub fn bishop_move_is_pseudo_legal(from: Square, to: Square) -> bool {
    let row_diff = (row_of(from) as i8 - row_of(to) as i8).abs();
    let col_diff = (col_of(from) as i8 - col_of(to) as i8).abs();
    row_diff == col_diff && row_diff != 0
}

/// Ray-scan destinations in the four diagonal directions.
pub fn bishop_candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    slide_candidate_squares(game_state, from, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::{bishop_candidate_squares, bishop_move_is_pseudo_legal};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn diagonal_geometry() {
        let c1 = algebraic_to_square("c1").unwrap();
        assert!(bishop_move_is_pseudo_legal(c1, algebraic_to_square("a3").unwrap()));
        assert!(bishop_move_is_pseudo_legal(c1, algebraic_to_square("h6").unwrap()));
        assert!(!bishop_move_is_pseudo_legal(c1, algebraic_to_square("c4").unwrap()));
        assert!(!bishop_move_is_pseudo_legal(c1, c1));
    }

    #[test]
    fn starting_bishop_is_boxed_in() {
        let game_state = GameState::new_game();
        let c1 = algebraic_to_square("c1").unwrap();
        assert!(bishop_candidate_squares(&game_state, c1).is_empty());
    }

    #[test]
    fn open_bishop_sweeps_both_diagonals() {
        let game_state =
            GameState::from_fen("8/8/8/8/3B4/8/8/7k w - - 0 1").expect("FEN should parse");
        let d4 = algebraic_to_square("d4").unwrap();
        let candidates = bishop_candidate_squares(&game_state, d4);
        assert_eq!(candidates.len(), 13);
    }
}
