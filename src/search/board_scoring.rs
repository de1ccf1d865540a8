//! Static position evaluation.
//!
//! Scores are centipawns from the side-to-move's point of view: material
//! plus mobility for the non-pawn pieces, a positional term per pawn, and a
//! once-per-position pawn-structure bonus. Mobility counts legal moves for
//! pieces of either color, which keeps the raw sum independent of whose
//! turn it is; only the final sign flip depends on the side to move.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves_from_square;
use crate::utils::algebraic::{col_of, row_of};

/// Static evaluator seam used by the search.
pub trait BoardScorer {
    /// Centipawn score, positive for the side to move.
    fn score(&self, game_state: &mut GameState) -> i32;
}

/// Material + mobility + pawn-structure evaluator.
///
/// Mobility makes this evaluator far from free: it re-runs the legal-move
/// generator for every non-pawn piece it scores.
pub struct MobilityScorer;

impl BoardScorer for MobilityScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        let mut evaluation = 0i32;

        for square in 0..64u8 {
            evaluation += points_at_square(game_state, square);
        }

        evaluation += pawn_structure_bonus(game_state);

        evaluation * game_state.side_to_move.sign()
    }
}

/// Signed contribution of one square.
fn points_at_square(game_state: &mut GameState, square: Square) -> i32 {
    let Some(piece) = game_state.piece_on(square) else {
        return 0;
    };

    let raw = match piece.kind {
        PieceKind::Queen => 900 + 2 * (mobility(game_state, square) - 11),
        PieceKind::Rook => 500 + 4 * (mobility(game_state, square) - 7),
        PieceKind::Bishop => 330 + 7 * (mobility(game_state, square) - 7),
        PieceKind::Knight => 300 + 20 * (mobility(game_state, square) - 6),
        PieceKind::Pawn => pawn_points_at_square(piece.color, square),
        PieceKind::King => 0,
    };

    piece.color.sign() * raw
}

#[inline]
fn mobility(game_state: &mut GameState, square: Square) -> i32 {
    legal_moves_from_square(game_state, square).len() as i32
}

/// Pawns score by advancement, with a center bump on the 2x2 core.
fn pawn_points_at_square(color: Color, square: Square) -> i32 {
    let row = row_of(square) as i32;
    let col = col_of(square) as i32;

    let back_rank = color.back_rank_row() as i32;
    let advanced = 6 - (back_rank - row) * (2 * color.index() as i32 - 1);
    let mut score = 100 + 8 * advanced;

    if (row == 3 || row == 4) && (col == 3 || col == 4) {
        score += 10;
    }

    score
}

/// Doubled-pawn penalties and connected-pawn bonuses, light minus dark.
fn pawn_structure_bonus(game_state: &GameState) -> i32 {
    let mut light_files: [Vec<u8>; 8] = Default::default();
    let mut dark_files: [Vec<u8>; 8] = Default::default();

    for square in 0..64u8 {
        let Some(piece) = game_state.piece_on(square) else {
            continue;
        };
        if piece.kind != PieceKind::Pawn {
            continue;
        }

        let file = col_of(square) as usize;
        match piece.color {
            Color::Light => light_files[file].push(row_of(square)),
            Color::Dark => dark_files[file].push(row_of(square)),
        }
    }

    score_pawn_files(&light_files, Color::Light) - score_pawn_files(&dark_files, Color::Dark)
}

/// Score one color's pawn rows grouped by file: -5 per extra pawn stacked
/// on a file, +2 for each adjacent-file pair offset by exactly one row in
/// the direction of play.
fn score_pawn_files(files: &[Vec<u8>; 8], color: Color) -> i32 {
    let forward = color.forward_row() as i32;
    let mut bonus = 0i32;

    for file in 0..8 {
        if files[file].len() > 1 {
            bonus -= 5 * (files[file].len() as i32 - 1);
        }

        if file == 7 {
            continue;
        }
        for &row in &files[file] {
            for &neighbor_row in &files[file + 1] {
                let diff = row as i32 - neighbor_row as i32;
                if diff == forward || -diff == forward {
                    bonus += 2;
                }
            }
        }
    }

    bonus
}
