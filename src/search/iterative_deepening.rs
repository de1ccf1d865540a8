//! Iterative-deepening alpha-beta negamax search.
//!
//! Each iteration runs a fresh full-window alpha-beta pass over the same
//! board, driven by make/unmake with one stack-allocated undo record per
//! frame. The caller-owned stop flag is polled at the entry of every node;
//! once set, the search unwinds by returning static evaluations, so the
//! board is back in its pre-search state within bounded work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::MoveDescription;
use crate::search::board_scoring::BoardScorer;

/// Score of a mated side to move.
pub const MATE_SCORE: i32 = 9999;
/// Search window bound; strictly dominates every reachable score.
const SCORE_INFINITY: i32 = 10000;

/// Depth used when the controller asks for an open-ended search; the outer
/// loop is then terminated only by the stop flag.
pub const UNBOUNDED_SEARCH_DEPTH: u16 = 10000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u16,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

/// Snapshot of one completed deepening iteration.
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub depth: u16,
    pub nodes: u64,
    pub nps: u64,
    /// Centipawns from the side to move's point of view.
    pub score_cp: i32,
    pub elapsed_ms: u64,
    pub pv: Vec<MoveDescription>,
}

/// Final search outcome.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<MoveDescription>,
    /// Centipawns normalized so that positive favors light.
    pub score_cp: i32,
    pub reached_depth: u16,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub pv: Vec<MoveDescription>,
}

/// Run iterative deepening from depth 1 to `config.max_depth`, reporting
/// each completed iteration through `on_iteration`.
///
/// The result reflects the deepest completed iteration, or the partial
/// iteration in flight when the stop flag fired before any completed.
pub fn iterative_deepening_search<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
    stop: &AtomicBool,
    mut on_iteration: impl FnMut(&IterationReport),
) -> SearchResult {
    let started_at = Instant::now();
    let mover = game_state.side_to_move;
    let mut result = SearchResult::default();

    for depth in 1..=config.max_depth.max(1) {
        let iteration_started_at = Instant::now();
        let mut nodes = 0u64;
        let mut line = Vec::new();

        let (score, pv) = alpha_beta(
            game_state,
            scorer,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            depth,
            &mut line,
            stop,
            &mut nodes,
        );

        let cancelled = stop.load(Ordering::Relaxed);
        if !cancelled || result.reached_depth == 0 {
            result.best_move = pv.first().copied();
            result.score_cp = mover_to_light_pov(score, mover);
            result.reached_depth = depth;
            result.nodes = nodes;
            result.pv = pv.clone();
        }

        if cancelled {
            break;
        }

        let elapsed_ms = iteration_started_at.elapsed().as_millis() as u64;
        on_iteration(&IterationReport {
            depth,
            nodes,
            nps: nodes_per_second(nodes, elapsed_ms),
            score_cp: score,
            elapsed_ms,
            pv,
        });
    }

    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result
}

/// Negamax with alpha-beta pruning over make/unmake.
///
/// `line` is the path of moves from the root to this node; the returned
/// principal variation extends it, so the root receives a full line.
fn alpha_beta<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    mut alpha: i32,
    beta: i32,
    depth: u16,
    line: &mut Vec<MoveDescription>,
    stop: &AtomicBool,
    nodes: &mut u64,
) -> (i32, Vec<MoveDescription>) {
    *nodes += 1;

    if stop.load(Ordering::Relaxed) || depth == 0 {
        return (scorer.score(game_state), line.clone());
    }

    let moves = generate_legal_moves(game_state);
    if moves.is_empty() {
        let score = if is_king_in_check(game_state, game_state.side_to_move) {
            -MATE_SCORE
        } else {
            0
        };
        return (score, line.clone());
    }

    let mut best_line = Vec::new();

    for mv in moves {
        let Ok(undo) = make_move_in_place(game_state, mv) else {
            continue;
        };
        line.push(mv);

        let (child_score, child_line) = alpha_beta(
            game_state,
            scorer,
            -beta,
            -alpha,
            depth - 1,
            line,
            stop,
            nodes,
        );

        line.pop();
        unmake_move_in_place(game_state, &undo);

        let score = -child_score;
        if score >= beta {
            return (beta, Vec::new());
        }
        if score > alpha {
            alpha = score;
            best_line = child_line;
        }
    }

    (alpha, best_line)
}

#[inline]
fn mover_to_light_pov(score: i32, mover: Color) -> i32 {
    match mover {
        Color::Light => score,
        Color::Dark => -score,
    }
}

#[inline]
fn nodes_per_second(nodes: u64, elapsed_ms: u64) -> u64 {
    if elapsed_ms == 0 {
        0
    } else {
        nodes.saturating_mul(1000) / elapsed_ms
    }
}
