//! Per-piece pseudo-move rules.
//!
//! Pseudo-legality respects piece geometry and board occupancy but ignores
//! turn order and king safety; the legal-move layer filters these through
//! the executor. King candidates are the one exception: their castling
//! destinations already carry the full castling predicate.

pub mod bishop_moves;
pub mod king_moves;
pub mod knight_moves;
pub mod move_descriptions;
pub mod pawn_moves;
pub mod queen_moves;
pub mod rook_moves;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::empty_squares_between;
use crate::utils::algebraic::{col_of, on_board, row_of, square_at};

/// Preliminary move validation: correct geometry for the piece on `from`,
/// no own-color capture, sliders unobstructed. Turn and king safety are
/// checked by the executor.
pub fn pseudo_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let Some(piece) = game_state.piece_on(from) else {
        return false;
    };
    if game_state.color_on(to) == Some(piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::King => {
            king_moves::king_move_is_pseudo_legal(from, to)
                || king_moves::castle_is_legal(game_state, from, to)
        }
        PieceKind::Queen => {
            queen_moves::queen_move_is_pseudo_legal(from, to)
                && empty_squares_between(game_state, from, to)
        }
        PieceKind::Rook => {
            rook_moves::rook_move_is_pseudo_legal(from, to)
                && empty_squares_between(game_state, from, to)
        }
        PieceKind::Bishop => {
            bishop_moves::bishop_move_is_pseudo_legal(from, to)
                && empty_squares_between(game_state, from, to)
        }
        PieceKind::Knight => knight_moves::knight_move_is_pseudo_legal(from, to),
        PieceKind::Pawn => pawn_moves::pawn_move_is_pseudo_legal(game_state, from, to),
    }
}

/// Candidate destination squares for the piece on `from`, fanned out by
/// piece kind. Empty when the square is empty.
pub fn candidate_squares(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.piece_on(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::King => king_moves::king_candidate_squares(game_state, from),
        PieceKind::Queen => queen_moves::queen_candidate_squares(game_state, from),
        PieceKind::Rook => rook_moves::rook_candidate_squares(game_state, from),
        PieceKind::Bishop => bishop_moves::bishop_candidate_squares(game_state, from),
        PieceKind::Knight => knight_moves::knight_candidate_squares(game_state, from),
        PieceKind::Pawn => pawn_moves::pawn_candidate_squares(game_state, from),
    }
}

/// Ray scan used by the slider candidate generators: each direction extends
/// until the board edge, stops before an own-color blocker, and includes an
/// opposing piece's square as a capture.
pub(crate) fn slide_candidate_squares(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let Some(color) = game_state.color_on(from) else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(16);

    for &(row_delta, col_delta) in directions {
        let mut row = row_of(from) as i8 + row_delta;
        let mut col = col_of(from) as i8 + col_delta;

        while on_board(row, col) {
            let to = square_at(row as u8, col as u8);
            match game_state.color_on(to) {
                Some(blocker) if blocker == color => break,
                Some(_) => {
                    candidates.push(to);
                    break;
                }
                None => candidates.push(to),
            }
            row += row_delta;
            col += col_delta;
        }
    }

    candidates
}
