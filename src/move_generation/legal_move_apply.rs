//! Move execution with exact undo.
//!
//! `make_move_in_place` validates a move, mutates the board, and returns a
//! stack-allocated undo record; `unmake_move_in_place` restores the prior
//! state exactly. A move that would leave the mover's king in check is
//! rolled back through the same undo path before the error is reported, so
//! every apply is paired with an identical restore, promotions included.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    castle_attempt, castle_right_mask, promotion_row, rook_castle_target, rook_home_square,
    CastleSide,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pseudo_legal_move;
use crate::utils::algebraic::row_of;

/// Apply `mv` for the side to move, returning the undo record on success.
///
/// Rejections restore the board before returning, so the state is unchanged
/// on any `Err`.
pub fn make_move_in_place(
    game_state: &mut GameState,
    mv: MoveDescription,
) -> Result<UndoState, ChessErrors> {
    let moved_piece = game_state
        .piece_on(mv.from)
        .ok_or(ChessErrors::NoPieceOnSquare(mv.from))?;
    let color = moved_piece.color;

    if color != game_state.side_to_move {
        return Err(ChessErrors::NotSideToMove(mv.from));
    }

    if !pseudo_legal_move(game_state, mv.from, mv.to) {
        return Err(ChessErrors::NotPseudoLegal);
    }

    let mut undo = UndoState {
        mv,
        moved_piece,
        captured: None,
        rook_move: None,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
    };

    // Castling rights are one-way latches: moving the king drops both,
    // moving a rook off its corner drops that wing.
    if moved_piece.kind == PieceKind::King {
        game_state.castling_rights &= !(castle_right_mask(color, CastleSide::KingSide)
            | castle_right_mask(color, CastleSide::QueenSide));
    }
    if moved_piece.kind == PieceKind::Rook {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if mv.from == rook_home_square(color, side) {
                game_state.castling_rights &= !castle_right_mask(color, side);
            }
        }
    }
    // A capture landing on a rook's home corner latches that wing as well.
    let opponent = color.opposite();
    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if mv.to == rook_home_square(opponent, side) {
            game_state.castling_rights &= !castle_right_mask(opponent, side);
        }
    }

    // A castle also moves the rook.
    if moved_piece.kind == PieceKind::King {
        if let Some(side) = castle_attempt(color, mv.from, mv.to) {
            let rook_from = rook_home_square(color, side);
            let rook_to = rook_castle_target(color, side);
            game_state.squares[rook_to as usize] = game_state.squares[rook_from as usize];
            game_state.squares[rook_from as usize] = None;
            undo.rook_move = Some((rook_from, rook_to));
        }
    }

    // En passant removes a pawn from behind the destination square.
    if moved_piece.kind == PieceKind::Pawn
        && game_state.en_passant_square == Some(mv.to)
        && game_state.piece_on(mv.to).is_none()
    {
        let behind = match color {
            Color::Light => mv.to + 8,
            Color::Dark => mv.to - 8,
        };
        if let Some(victim) = game_state.piece_on(behind) {
            undo.captured = Some((behind, victim));
            game_state.squares[behind as usize] = None;
        }
    } else if let Some(victim) = game_state.piece_on(mv.to) {
        undo.captured = Some((mv.to, victim));
    }

    // The en-passant target lives for exactly one half-move after a double
    // push.
    game_state.en_passant_square = if moved_piece.kind == PieceKind::Pawn
        && mv.from.abs_diff(mv.to) == 16
    {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    // Move the piece, promoting on the last rank (queen by default).
    let placed = if moved_piece.kind == PieceKind::Pawn && row_of(mv.to) == promotion_row(color) {
        Piece::new(color, mv.promotion.unwrap_or(PieceKind::Queen))
    } else {
        moved_piece
    };
    game_state.squares[mv.to as usize] = Some(placed);
    game_state.squares[mv.from as usize] = None;

    game_state.side_to_move = opponent;

    if is_king_in_check(game_state, color) {
        unmake_move_in_place(game_state, &undo);
        return Err(ChessErrors::LeavesKingInCheck);
    }

    Ok(undo)
}

/// Restore the exact state preceding the paired `make_move_in_place`.
/// Total and infallible; performs no allocation.
pub fn unmake_move_in_place(game_state: &mut GameState, undo: &UndoState) {
    let mv = undo.mv;

    game_state.squares[mv.to as usize] = None;
    game_state.squares[mv.from as usize] = Some(undo.moved_piece);

    if let Some((square, victim)) = undo.captured {
        game_state.squares[square as usize] = Some(victim);
    }

    if let Some((rook_from, rook_to)) = undo.rook_move {
        game_state.squares[rook_from as usize] = game_state.squares[rook_to as usize];
        game_state.squares[rook_to as usize] = None;
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.side_to_move = undo.moved_piece.color;
}

/// Pure legality probe: applies and undoes symmetrically in all paths and
/// reports only the legality bit.
#[inline]
pub fn is_legal_move(game_state: &mut GameState, mv: MoveDescription) -> bool {
    match make_move_in_place(game_state, mv) {
        Ok(undo) => {
            unmake_move_in_place(game_state, &undo);
            true
        }
        Err(_) => false,
    }
}
