//! Terminal-oriented board renderer for debugging views.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves_from_square;
use crate::utils::algebraic::square_at;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_marks(game_state, &[])
}

/// Render the board with the legal destinations of the piece on `from`
/// marked: `x` for a move to an empty square, `c` for a capture.
pub fn render_legal_targets(game_state: &mut GameState, from: Square) -> String {
    let targets: Vec<Square> = legal_moves_from_square(game_state, from)
        .iter()
        .map(|mv| mv.to)
        .collect();
    render_with_marks(game_state, &targets)
}

fn render_with_marks(game_state: &GameState, targets: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8u8 {
            let square = square_at(row, col);
            let glyph = if targets.contains(&square) {
                if game_state.piece_on(square).is_some() {
                    'c'
                } else {
                    'x'
                }
            } else {
                match game_state.piece_on(square) {
                    Some(piece) => piece_to_unicode(piece),
                    None => '·',
                }
            };
            out.push(glyph);

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
