//! Long algebraic move notation (`e2e4`, `e7e8q`) conversions.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse a long algebraic move: four coordinate characters plus an optional
/// promotion letter. The promotion letter may be omitted for promoting
/// moves; the executor then promotes to a queen.
pub fn move_from_long_algebraic(text: &str) -> Result<MoveDescription, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(ChessErrors::InvalidAlgebraicMove(text.into()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let promotion = if bytes.len() == 5 {
        Some(char_to_promotion(bytes[4] as char)?)
    } else {
        None
    };

    Ok(MoveDescription {
        from,
        to,
        promotion,
    })
}

/// Render a move in long algebraic notation.
pub fn move_to_long_algebraic(mv: &MoveDescription) -> Result<String, ChessErrors> {
    let mut out = String::new();
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(promotion) = mv.promotion {
        out.push(promotion_to_char(promotion)?);
    }

    Ok(out)
}

fn promotion_to_char(kind: PieceKind) -> Result<char, ChessErrors> {
    match kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        _ => Err(ChessErrors::InvalidAlgebraicMove(format!(
            "invalid promotion piece: {kind:?}"
        ))),
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidAlgebraicMove(format!(
            "invalid promotion character: {ch}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{move_from_long_algebraic, move_to_long_algebraic};
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn round_trip_simple_move() {
        let mv = move_from_long_algebraic("e2e4").expect("move should parse");
        assert_eq!(mv.from, 52);
        assert_eq!(mv.to, 36);
        assert_eq!(mv.promotion, None);
        assert_eq!(
            move_to_long_algebraic(&mv).expect("move should render"),
            "e2e4"
        );
    }

    #[test]
    fn round_trip_promotion_move() {
        let mv = move_from_long_algebraic("e7e8q").expect("move should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(
            move_to_long_algebraic(&mv).expect("move should render"),
            "e7e8q"
        );

        let underpromotion = move_from_long_algebraic("a2a1n").expect("move should parse");
        assert_eq!(underpromotion.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!(move_from_long_algebraic("e2").is_err());
        assert!(move_from_long_algebraic("e2e9").is_err());
        assert!(move_from_long_algebraic("e7e8x").is_err());
        assert!(move_from_long_algebraic("e7e8qq").is_err());
    }
}
