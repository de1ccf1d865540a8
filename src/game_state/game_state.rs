//! Mailbox board state representation.
//!
//! `GameState` is the central model for the engine: a 64-slot piece array
//! plus side to move, castling rights, and the en-passant target. It is
//! built once from FEN and then mutated in place by make/unmake style
//! workflows, so a paired apply+undo must leave it exactly equal to its
//! prior state.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Mailbox game state optimized for fast move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Row-major from a8; `None` is an empty square.
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square behind a just-double-pushed pawn, cleared on every other move.
    pub en_passant_square: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Color occupying a square, if any.
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.squares[square as usize].map(|p| p.color)
    }
}
