//! The production engine: iterative-deepening alpha-beta plus the opening
//! book.
//!
//! A book hit supplants the searched move, but the search still runs so the
//! controller receives its per-iteration info output.

use std::sync::atomic::AtomicBool;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::search::board_scoring::MobilityScorer;
use crate::search::iterative_deepening::{
    iterative_deepening_search, IterationReport, SearchConfig,
};
use crate::tables::opening_book::OpeningBook;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub struct IterativeEngine {
    default_depth: u16,
    scorer: MobilityScorer,
    book: OpeningBook,
    rng: StdRng,
}

impl IterativeEngine {
    pub fn new(default_depth: u16) -> Self {
        Self {
            default_depth,
            scorer: MobilityScorer,
            book: OpeningBook::load_default(),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_book(default_depth: u16, book: OpeningBook) -> Self {
        Self {
            default_depth,
            scorer: MobilityScorer,
            book,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Engine for IterativeEngine {
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
        stop: &AtomicBool,
        emit: &mut dyn FnMut(String),
    ) -> Option<MoveDescription> {
        let book_move = self.book.choose_weighted_move(game_state, &mut self.rng);

        let mut scratch = game_state.clone();
        let result = iterative_deepening_search(
            &mut scratch,
            &self.scorer,
            SearchConfig {
                max_depth: params.depth.unwrap_or(self.default_depth).max(1),
            },
            stop,
            |report| emit(format_info_line(report)),
        );

        book_move.or(result.best_move)
    }
}

fn format_info_line(report: &IterationReport) -> String {
    let pv = report
        .pv
        .iter()
        .filter_map(|mv| move_to_long_algebraic(mv).ok())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "info depth {} nodes {} nps {} score cp {} time {} multipv 1 pv {}",
        report.depth, report.nodes, report.nps, report.score_cp, report.elapsed_ms, pv
    )
}
