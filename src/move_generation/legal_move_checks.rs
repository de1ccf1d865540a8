//! Attack and check detection.
//!
//! `is_square_attacked` scans all 64 squares and tests pseudo-legal reach
//! onto the target. Pawns use their diagonal capture geometry regardless of
//! whether a victim stands on the target square, so checks through empty
//! squares are detected correctly.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::empty_squares_between;
use crate::moves::bishop_moves::bishop_move_is_pseudo_legal;
use crate::moves::king_moves::king_move_is_pseudo_legal;
use crate::moves::knight_moves::knight_move_is_pseudo_legal;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::queen_moves::queen_move_is_pseudo_legal;
use crate::moves::rook_moves::rook_move_is_pseudo_legal;

/// Locate the king of `color`.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let king = Piece::new(color, PieceKind::King);
    (0..64).find(|&sq| game_state.piece_on(sq) == Some(king))
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` has pseudo-legal reach onto
/// `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    for from in 0..64 {
        let Some(piece) = game_state.piece_on(from) else {
            continue;
        };
        if piece.color != attacker_color || from == square {
            continue;
        }

        let reaches = match piece.kind {
            PieceKind::Pawn => pawn_attacks_square(attacker_color, from, square),
            PieceKind::Knight => knight_move_is_pseudo_legal(from, square),
            PieceKind::King => king_move_is_pseudo_legal(from, square),
            PieceKind::Bishop => {
                bishop_move_is_pseudo_legal(from, square)
                    && empty_squares_between(game_state, from, square)
            }
            PieceKind::Rook => {
                rook_move_is_pseudo_legal(from, square)
                    && empty_squares_between(game_state, from, square)
            }
            PieceKind::Queen => {
                queen_move_is_pseudo_legal(from, square)
                    && empty_squares_between(game_state, from, square)
            }
        };

        if reaches {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked, king_square};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> u8 {
        algebraic_to_square(text).expect("square should parse")
    }

    #[test]
    fn locates_both_kings_in_the_start_position() {
        let game_state = GameState::new_game();
        assert_eq!(king_square(&game_state, Color::Light), Some(sq("e1")));
        assert_eq!(king_square(&game_state, Color::Dark), Some(sq("e8")));
        assert!(!is_king_in_check(&game_state, Color::Light));
        assert!(!is_king_in_check(&game_state, Color::Dark));
    }

    #[test]
    fn pawns_attack_empty_diagonal_squares() {
        let game_state =
            GameState::from_fen("8/8/8/4P3/8/8/8/k6K w - - 0 1").expect("FEN should parse");

        assert!(is_square_attacked(&game_state, sq("d6"), Color::Light));
        assert!(is_square_attacked(&game_state, sq("f6"), Color::Light));
        assert!(!is_square_attacked(&game_state, sq("e6"), Color::Light));
        assert!(!is_square_attacked(&game_state, sq("d4"), Color::Light));
    }

    #[test]
    fn sliders_attack_through_empty_squares_only() {
        // Dark rook a8, light pawn a4.
        let game_state =
            GameState::from_fen("r7/8/8/8/P7/8/8/k6K w - - 0 1").expect("FEN should parse");

        assert!(is_square_attacked(&game_state, sq("a5"), Color::Dark));
        assert!(is_square_attacked(&game_state, sq("a4"), Color::Dark));
        assert!(!is_square_attacked(&game_state, sq("a3"), Color::Dark), "pawn blocks the file");
        assert!(is_square_attacked(&game_state, sq("h8"), Color::Dark));
    }

    #[test]
    fn detects_knight_and_bishop_checks() {
        let knight_check = GameState::from_fen("8/8/8/8/8/3n4/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_in_check(&knight_check, Color::Light));

        let bishop_check = GameState::from_fen("b7/8/8/8/8/8/8/7K w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_in_check(&bishop_check, Color::Light));

        let blocked = GameState::from_fen("b7/8/8/3P4/8/8/8/7K w - - 0 1")
            .expect("FEN should parse");
        assert!(!is_king_in_check(&blocked, Color::Light));
    }
}
