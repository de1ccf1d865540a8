//! Ray-walking helpers shared by the slider rules, the attack detector, and
//! the castling predicate.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{col_of, row_of, square_at};

/// Per-axis sign of travel from one square toward another (-1, 0, or 1).
#[inline]
pub fn travel_direction(from: Square, to: Square) -> (i8, i8) {
    let row_dir = (row_of(to) as i8 - row_of(from) as i8).signum();
    let col_dir = (col_of(to) as i8 - col_of(from) as i8).signum();
    (row_dir, col_dir)
}

/// The squares strictly between two aligned squares, walking the shared
/// rank, file, or diagonal. Endpoints are excluded.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let (row_dir, col_dir) = travel_direction(from, to);
    let mut between = Vec::with_capacity(6);

    let mut row = row_of(from) as i8 + row_dir;
    let mut col = col_of(from) as i8 + col_dir;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let square = square_at(row as u8, col as u8);
        if square == to {
            break;
        }
        between.push(square);
        row += row_dir;
        col += col_dir;
    }

    between
}

/// True when no piece stands strictly between two aligned squares.
#[inline]
pub fn empty_squares_between(game_state: &GameState, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .iter()
        .all(|&sq| game_state.piece_on(sq).is_none())
}

#[cfg(test)]
mod tests {
    use super::{empty_squares_between, squares_between, travel_direction};
    use crate::game_state::game_state::GameState;

    #[test]
    fn travel_direction_signs() {
        // a1 (56) toward a8 (0): rows shrink, column fixed.
        assert_eq!(travel_direction(56, 0), (-1, 0));
        // a8 toward h1 (63): main diagonal.
        assert_eq!(travel_direction(0, 63), (1, 1));
        assert_eq!(travel_direction(63, 0), (-1, -1));
    }

    #[test]
    fn squares_between_walks_the_ray_exclusively() {
        // e1 (60) to e8 (4): six intermediate squares on the e-file.
        let between = squares_between(60, 4);
        assert_eq!(between, vec![52, 44, 36, 28, 20, 12]);

        // Adjacent squares have nothing between them.
        assert!(squares_between(60, 52).is_empty());
    }

    #[test]
    fn empty_between_respects_blockers() {
        let game_state = GameState::new_game();
        // e2 pawn blocks the e-file between e1 and e8.
        assert!(!empty_squares_between(&game_state, 60, 4));
        // Nothing between the e2 and e5 squares except e3/e4, both empty.
        assert!(empty_squares_between(&game_state, 52, 28));
    }
}
