//! Opening-book support with TSV import compatible with public opening
//! datasets.
//!
//! Loads opening sequences from a tab-separated file and indexes the
//! candidate next moves of every prefix position, keyed by the position's
//! four state-carrying FEN fields. Lookups pick among the candidates at
//! random, weighted by how often each continuation appears.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move_in_place;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::fen_generator::position_key;
use crate::utils::long_algebraic::move_from_long_algebraic;

#[derive(Debug, Clone)]
pub struct BookMove {
    pub mv: MoveDescription,
    pub weight: u32,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    by_position: HashMap<String, Vec<BookMove>>,
}

impl OpeningBook {
    /// Load the opening book from `tables/openings.tsv` when present,
    /// otherwise fall back to a small embedded default table.
    pub fn load_default() -> Self {
        let candidates = ["tables/openings.tsv", "tables/chess-openings.tsv"];

        for path in candidates {
            if Path::new(path).exists() {
                if let Ok(book) = Self::from_tsv_path(path) {
                    return book;
                }
            }
        }

        Self::from_tsv_str(include_str!("data/opening_book_minimal.tsv")).unwrap_or_default()
    }

    pub fn from_tsv_path(path: &str) -> Result<Self, ChessErrors> {
        let data = fs::read_to_string(path)
            .map_err(|e| ChessErrors::OpeningBook(format!("failed reading {path}: {e}")))?;
        Self::from_tsv_str(&data)
    }

    pub fn from_tsv_str(tsv: &str) -> Result<Self, ChessErrors> {
        let mut lines = tsv.lines().filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| ChessErrors::OpeningBook("opening TSV is empty".to_owned()))?;
        let columns: Vec<&str> = header.split('\t').collect();

        let mut sequence_idx = None;
        let mut weight_idx = None;

        for (i, name) in columns.iter().enumerate() {
            let lc = name.trim().to_ascii_lowercase();
            if lc == "uci" || lc == "moves" {
                sequence_idx.get_or_insert(i);
            } else if lc == "weight" || lc == "count" || lc == "plays" {
                weight_idx = Some(i);
            }
        }

        let sequence_idx = sequence_idx.ok_or_else(|| {
            ChessErrors::OpeningBook(
                "opening TSV must contain a 'uci' or 'moves' column".to_owned(),
            )
        })?;

        let mut weights_by_position: HashMap<String, HashMap<MoveDescription, u32>> =
            HashMap::new();

        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            let sequence = fields
                .get(sequence_idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    ChessErrors::OpeningBook(format!("missing move sequence in row '{line}'"))
                })?;

            let row_weight = weight_idx
                .and_then(|idx| fields.get(idx).copied())
                .and_then(|w| w.trim().parse::<u32>().ok())
                .unwrap_or(1);

            let mut state = GameState::new_game();
            for token in sequence.split_whitespace() {
                let mv = move_from_long_algebraic(token)?;

                let move_weights = weights_by_position.entry(position_key(&state)).or_default();
                let entry = move_weights.entry(mv).or_insert(0);
                *entry = entry.saturating_add(row_weight.max(1));

                make_move_in_place(&mut state, mv).map_err(|e| {
                    ChessErrors::OpeningBook(format!(
                        "illegal move '{token}' in opening row '{line}': {e}"
                    ))
                })?;
            }
        }

        let by_position = weights_by_position
            .into_iter()
            .map(|(key, moves)| {
                let row = moves
                    .into_iter()
                    .map(|(mv, weight)| BookMove { mv, weight })
                    .collect();
                (key, row)
            })
            .collect();

        Ok(Self { by_position })
    }

    pub fn moves_for(&self, game_state: &GameState) -> Option<&[BookMove]> {
        self.by_position
            .get(&position_key(game_state))
            .map(|row| row.as_slice())
    }

    /// Weighted random pick among the book moves for this position.
    pub fn choose_weighted_move<R: Rng + ?Sized>(
        &self,
        game_state: &GameState,
        rng: &mut R,
    ) -> Option<MoveDescription> {
        let moves = self.moves_for(game_state)?;
        if moves.is_empty() {
            return None;
        }

        let total_weight: u64 = moves.iter().map(|m| u64::from(m.weight)).sum();
        if total_weight == 0 {
            return Some(moves[0].mv);
        }

        let mut pick = rng.random_range(0..total_weight);
        for m in moves {
            let w = u64::from(m.weight);
            if pick < w {
                return Some(m.mv);
            }
            pick -= w;
        }

        Some(moves[0].mv)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::OpeningBook;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::make_move_in_place;
    use crate::utils::long_algebraic::{move_from_long_algebraic, move_to_long_algebraic};

    #[test]
    fn opening_book_indexes_every_prefix_position() {
        let tsv =
            "eco\tname\tuci\tweight\nC20\tKing Pawn\te2e4 e7e5\t5\nD00\tQueen Pawn\td2d4 d7d5\t3\n";
        let book = OpeningBook::from_tsv_str(tsv).expect("book should parse");

        let mut state = GameState::new_game();
        let start_row = book.moves_for(&state).expect("start position should be indexed");
        assert_eq!(start_row.len(), 2);

        let e2e4 = move_from_long_algebraic("e2e4").expect("move should parse");
        make_move_in_place(&mut state, e2e4).expect("move should apply");
        let reply_row = book.moves_for(&state).expect("reply position should be indexed");
        assert_eq!(reply_row.len(), 1);
        assert_eq!(
            move_to_long_algebraic(&reply_row[0].mv).expect("move should render"),
            "e7e5"
        );
    }

    #[test]
    fn choose_weighted_move_picks_a_book_line() {
        let tsv = "uci\tweight\ne2e4 e7e5\t4\nd2d4 d7d5\t1\n";
        let book = OpeningBook::from_tsv_str(tsv).expect("book should parse");
        let start = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(7);

        let mv = book
            .choose_weighted_move(&start, &mut rng)
            .expect("book should choose a move");
        let lan = move_to_long_algebraic(&mv).expect("move should render");
        assert!(lan == "e2e4" || lan == "d2d4");
    }

    #[test]
    fn rejects_illegal_book_rows() {
        let tsv = "uci\ne2e5\n";
        assert!(OpeningBook::from_tsv_str(tsv).is_err());
    }

    #[test]
    fn embedded_fallback_book_covers_the_start_position() {
        let book = OpeningBook::load_default();
        let start = GameState::new_game();
        assert!(book.moves_for(&start).is_some());
    }
}
