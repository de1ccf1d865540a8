//! King move rules, including the castling predicate.

use crate::game_state::chess_rules::{
    castle_attempt, castle_right_mask, rook_home_square,
};
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::{empty_squares_between, squares_between};
use crate::utils::algebraic::{col_of, on_board, row_of, square_at};

pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
];

/// One-step geometry; castling is a separate predicate.
#[inline]
pub fn king_move_is_pseudo_legal(from: Square, to: Square) -> bool {
    let row_diff = (row_of(from) as i8 - row_of(to) as i8).abs();
    let col_diff = (col_of(from) as i8 - col_of(to) as i8).abs();
    from != to && row_diff <= 1 && col_diff <= 1
}

/// Full castling predicate: rights still latched on, king and rook still on
/// their home squares, empty corridor to the rook, king not currently in
/// check, and no traversed or landing square attacked by the opponent.
pub fn castle_is_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    let Some(piece) = game_state.piece_on(from) else {
        return false;
    };
    if piece.kind != PieceKind::King {
        return false;
    }
    let color = piece.color;

    let Some(side) = castle_attempt(color, from, to) else {
        return false;
    };
    if game_state.castling_rights & castle_right_mask(color, side) == 0 {
        return false;
    }

    let rook_home = rook_home_square(color, side);
    if game_state.piece_on(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    if is_king_in_check(game_state, color) {
        return false;
    }

    if !empty_squares_between(game_state, from, rook_home) {
        return false;
    }

    // The king may not pass through or land on an attacked square. Squares
    // only the rook crosses (b1/b8) are exempt.
    let opponent = color.opposite();
    for crossed in squares_between(from, to) {
        if is_square_attacked(game_state, crossed, opponent) {
            return false;
        }
    }
    if is_square_attacked(game_state, to, opponent) {
        return false;
    }

    true
}

/// One-step neighbors not occupied by the king's own side, plus the legal
/// castling destinations.
pub fn king_candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(color) = game_state.color_on(from) else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(10);
    for (row_delta, col_delta) in KING_STEPS {
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

    for castle_to in [from.wrapping_add(2), from.wrapping_sub(2)] {
        if castle_to < 64 && castle_is_legal(game_state, from, castle_to) {
            candidates.push(castle_to);
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::{castle_is_legal, king_candidate_squares, king_move_is_pseudo_legal};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> u8 {
        algebraic_to_square(text).expect("square should parse")
    }

    #[test]
    fn one_step_geometry() {
        assert!(king_move_is_pseudo_legal(sq("e1"), sq("e2")));
        assert!(king_move_is_pseudo_legal(sq("e1"), sq("d2")));
        assert!(!king_move_is_pseudo_legal(sq("e1"), sq("e3")));
        assert!(!king_move_is_pseudo_legal(sq("e1"), sq("g1")));
        assert!(!king_move_is_pseudo_legal(sq("e1"), sq("e1")));
    }

    #[test]
    fn castling_legal_on_an_open_home_rank() {
        let game_state = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");

        assert!(castle_is_legal(&game_state, sq("e1"), sq("g1")));
        assert!(castle_is_legal(&game_state, sq("e1"), sq("c1")));
        assert!(castle_is_legal(&game_state, sq("e8"), sq("g8")));
        assert!(castle_is_legal(&game_state, sq("e8"), sq("c8")));

        let candidates = king_candidate_squares(&game_state, sq("e1"));
        assert!(candidates.contains(&sq("g1")));
        assert!(candidates.contains(&sq("c1")));
    }

    #[test]
    fn castling_rejected_without_the_right() {
        let game_state = GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Qkq - 0 1")
            .expect("FEN should parse");
        assert!(!castle_is_legal(&game_state, sq("e1"), sq("g1")));
        assert!(castle_is_legal(&game_state, sq("e1"), sq("c1")));
    }

    #[test]
    fn castling_rejected_through_an_attacked_square() {
        // Dark rook on f8 covers f1: kingside is out even though g1 is safe.
        let game_state = GameState::from_fen("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        assert!(!castle_is_legal(&game_state, sq("e1"), sq("g1")));
        assert!(castle_is_legal(&game_state, sq("e1"), sq("c1")));
    }

    #[test]
    fn castling_rejected_out_of_check() {
        let game_state = GameState::from_fen("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        assert!(!castle_is_legal(&game_state, sq("e1"), sq("g1")));
        assert!(!castle_is_legal(&game_state, sq("e1"), sq("c1")));
    }

    #[test]
    fn queenside_allows_an_attacked_rook_path_square() {
        // Dark rook on b8 attacks b1, which only the rook crosses.
        let game_state = GameState::from_fen("1r6/8/8/8/8/8/8/R3K3 w Q - 0 1")
            .expect("FEN should parse");
        assert!(castle_is_legal(&game_state, sq("e1"), sq("c1")));
    }

    #[test]
    fn castling_rejected_with_a_blocked_corridor() {
        let game_state = GameState::new_game();
        assert!(!castle_is_legal(&game_state, sq("e1"), sq("g1")));
    }
}
