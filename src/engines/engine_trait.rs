//! Engine abstraction layer used by the UCI subsystem.
//!
//! Defines the input parameters and the seam behind which a move-choosing
//! strategy runs, so the front end stays independent of the search stack.

use std::sync::atomic::AtomicBool;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;

/// Parsed `go` parameters relevant to this engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    pub depth: Option<u16>,
}

pub trait Engine: Send {
    /// Pick a move for the given position.
    ///
    /// Protocol `info` lines are pushed through `emit` as they become
    /// available; the caller-owned `stop` flag requests cooperative
    /// cancellation, after which the best result so far is returned.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
        stop: &AtomicBool,
        emit: &mut dyn FnMut(String),
    ) -> Option<MoveDescription>;
}
