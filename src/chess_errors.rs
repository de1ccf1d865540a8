//! Crate-wide error type.
//!
//! Every fallible operation in the engine reports one of these variants so
//! the UCI layer can turn failures into short diagnostic lines.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Represents all possible error types that can occur in the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    #[error("invalid long algebraic move: {0}")]
    InvalidAlgebraicMove(String),

    #[error("no piece on square {0}")]
    NoPieceOnSquare(Square),

    #[error("piece on square {0} does not belong to the side to move")]
    NotSideToMove(Square),

    #[error("move is not pseudo-legal")]
    NotPseudoLegal,

    #[error("move would leave the mover's king in check")]
    LeavesKingInCheck,

    #[error("opening book: {0}")]
    OpeningBook(String),
}
