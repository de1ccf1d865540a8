//! Legal move enumeration.
//!
//! Candidates come from the pseudo-move rules (castling destinations
//! included); each is retained only if the executor can apply it without
//! leaving the mover's king in check. Order within the returned list is
//! unspecified.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::is_legal_move;
use crate::moves::candidate_squares;
use crate::moves::move_descriptions::MoveDescription;

/// Every legal move for the side to move.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<MoveDescription> {
    let mut moves = Vec::with_capacity(64);

    for from in 0..64u8 {
        if game_state.color_on(from) != Some(game_state.side_to_move) {
            continue;
        }
        collect_legal_moves_from(game_state, from, &mut moves);
    }

    moves
}

/// Legal moves of the piece on `from`, regardless of whose turn it is.
///
/// For a piece of the side not to move, its color is temporarily adopted as
/// the side to move and the en-passant target is suppressed (the target
/// belongs to the actual side to move); both are restored before returning.
/// The evaluator leans on this for mobility counting.
pub fn legal_moves_from_square(game_state: &mut GameState, from: Square) -> Vec<MoveDescription> {
    let Some(piece) = game_state.piece_on(from) else {
        return Vec::new();
    };

    let saved_side = game_state.side_to_move;
    let saved_en_passant = game_state.en_passant_square;
    if piece.color != saved_side {
        game_state.side_to_move = piece.color;
        game_state.en_passant_square = None;
    }

    let mut moves = Vec::with_capacity(32);
    collect_legal_moves_from(game_state, from, &mut moves);

    game_state.side_to_move = saved_side;
    game_state.en_passant_square = saved_en_passant;

    moves
}

fn collect_legal_moves_from(
    game_state: &mut GameState,
    from: Square,
    moves: &mut Vec<MoveDescription>,
) {
    for to in candidate_squares(game_state, from) {
        let mv = MoveDescription::new(from, to);
        if is_legal_move(game_state, mv) {
            moves.push(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, legal_moves_from_square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::make_move_in_place;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> u8 {
        algebraic_to_square(text).expect("square should parse")
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game_state = GameState::new_game();
        assert_eq!(generate_legal_moves(&mut game_state).len(), 20);
    }

    #[test]
    fn every_generated_move_leaves_the_mover_safe() {
        let mut game_state = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");

        for mv in generate_legal_moves(&mut game_state) {
            let mover = game_state.side_to_move;
            let undo = make_move_in_place(&mut game_state, mv)
                .expect("generated move should apply");
            assert!(!is_king_in_check(&game_state, mover));
            crate::move_generation::legal_move_apply::unmake_move_in_place(
                &mut game_state,
                &undo,
            );
        }
    }

    #[test]
    fn a_pinned_piece_cannot_leave_the_line() {
        // Light rook e2 pinned by the dark rook on e8.
        let mut game_state =
            GameState::from_fen("4r3/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("FEN should parse");

        let rook_moves = legal_moves_from_square(&mut game_state, sq("e2"));
        assert!(rook_moves.iter().all(|m| sq("e8") % 8 == m.to % 8),
            "pinned rook should stay on the e-file");
        assert!(!rook_moves.is_empty());
    }

    #[test]
    fn mobility_counts_work_for_the_side_not_to_move() {
        let mut game_state = GameState::new_game();
        let reference = game_state.clone();

        let dark_knight_moves = legal_moves_from_square(&mut game_state, sq("b8"));
        assert_eq!(dark_knight_moves.len(), 2);
        assert_eq!(game_state, reference, "probe should not disturb the state");
    }

    #[test]
    fn checkmate_and_stalemate_yield_no_moves() {
        // Back-rank mate: dark to move with no reply.
        let mut mate = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        assert!(generate_legal_moves(&mut mate).is_empty());
        assert!(is_king_in_check(&mate, crate::game_state::chess_types::Color::Dark));

        // Classic queen stalemate: dark to move, not in check, nothing legal.
        let mut stalemate = GameState::from_fen("7k/5Q2/8/8/8/8/8/K7 b - - 0 1")
            .expect("FEN should parse");
        assert!(generate_legal_moves(&mut stalemate).is_empty());
        assert!(!is_king_in_check(
            &stalemate,
            crate::game_state::chess_types::Color::Dark
        ));
    }

    #[test]
    fn mate_in_one_position_includes_the_mating_queen_move() {
        let mut game_state =
            GameState::from_fen("7k/5QPP/8/8/8/8/8/7K w - - 0 1").expect("FEN should parse");
        let moves = generate_legal_moves(&mut game_state);

        let mating = crate::moves::move_descriptions::MoveDescription::new(sq("f7"), sq("g8"));
        assert!(moves.contains(&mating), "Qg8 should be generated");
    }
}
