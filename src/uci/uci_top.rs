//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, maintains the current position, and routes `go`
//! requests to the engine on a worker thread. The worker owns its own copy
//! of the position and shares only the stop flag with this loop, so
//! commands keep flowing while a search runs; info lines and `bestmove`
//! are written and flushed by the worker itself.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::engines::engine_iterative::IterativeEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move_in_place;
use crate::search::board_scoring::{BoardScorer, MobilityScorer};
use crate::search::iterative_deepening::UNBOUNDED_SEARCH_DEPTH;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::{move_from_long_algebraic, move_to_long_algebraic};
use crate::utils::render_game_state::{render_game_state, render_legal_targets};

const UCI_ENGINE_NAME: &str = "Quince Chess 0.1";
const UCI_ENGINE_AUTHOR: &str = "quince developers";

/// Depth used when `go` carries no depth argument.
const DEFAULT_GO_DEPTH: u16 = 4;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new();

    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    uci.finish_search();
    Ok(())
}

struct UciState {
    game_state: GameState,
    engine: Arc<Mutex<Box<dyn Engine>>>,
    debug_mode: bool,
    stop_flag: Arc<AtomicBool>,
    search_thread: Option<JoinHandle<()>>,
}

impl UciState {
    fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            engine: Arc::new(Mutex::new(build_engine())),
            debug_mode: false,
            stop_flag: Arc::new(AtomicBool::new(false)),
            search_thread: None,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", UCI_ENGINE_NAME)?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "ucinewgame" => {
                self.finish_search();
                self.game_state = GameState::new_game();
            }
            "debug" => match parts.next() {
                Some("on") => self.debug_mode = true,
                Some("off") => self.debug_mode = false,
                _ => writeln!(out, "Incorrect arguments.")?,
            },
            "position" => {
                if parts.next().is_none() {
                    writeln!(out, "Incorrect arguments.")?;
                } else if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "go" => {
                self.handle_go(trimmed);
            }
            "stop" => {
                self.finish_search();
            }
            "seval" => {
                let mut scratch = self.game_state.clone();
                writeln!(out, "{}", MobilityScorer.score(&mut scratch))?;
            }
            "dump" => {
                if self.debug_mode {
                    writeln!(out, "{}", self.game_state.get_fen())?;
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                } else {
                    writeln!(out, "Unknown command.")?;
                }
            }
            "legalmoves" => {
                if !self.debug_mode {
                    writeln!(out, "Unknown command.")?;
                } else {
                    match parts.next().map(algebraic_to_square) {
                        Some(Ok(square)) => {
                            let mut scratch = self.game_state.clone();
                            writeln!(out, "{}", render_legal_targets(&mut scratch, square))?;
                        }
                        _ => writeln!(out, "Command takes exactly one argument.")?,
                    }
                }
            }
            "quit" => {
                self.finish_search();
                return Ok(true);
            }
            _ => {
                writeln!(out, "Unknown command.")?;
            }
        }

        Ok(false)
    }

    fn handle_position(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let mut base_state = if let Some(tok) = tokens.next() {
            match tok {
                "startpos" => GameState::new_game(),
                "fen" => {
                    let mut fen_parts = Vec::<String>::new();
                    while let Some(next) = tokens.peek() {
                        if *next == "moves" {
                            break;
                        }
                        fen_parts.push(tokens.next().unwrap_or_default().to_owned());
                    }
                    if fen_parts.is_empty() {
                        return Err("missing FEN after 'position fen'".to_owned());
                    }
                    GameState::from_fen(&fen_parts.join(" ")).map_err(|e| e.to_string())?
                }
                other => return Err(format!("unsupported position token '{}'", other)),
            }
        } else {
            return Err("incomplete position command".to_owned());
        };

        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for lan in tokens {
                let Ok(mv) = move_from_long_algebraic(lan) else {
                    break;
                };
                // An illegal move halts the replay; the board stays in the
                // last legal state.
                if make_move_in_place(&mut base_state, mv).is_err() {
                    break;
                }
            }
        }

        self.game_state = base_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str) {
        self.finish_search();
        self.stop_flag.store(false, Ordering::Relaxed);

        let params = parse_go_params(line);
        let engine = Arc::clone(&self.engine);
        let stop = Arc::clone(&self.stop_flag);
        let game_state = self.game_state.clone();

        self.search_thread = Some(thread::spawn(move || {
            let Ok(mut engine) = engine.lock() else {
                return;
            };

            let mut emit = |info_line: String| print_protocol_line(&info_line);
            let best = engine.choose_move(&game_state, &params, &stop, &mut emit);

            let bestmove = best
                .and_then(|mv| move_to_long_algebraic(&mv).ok())
                .unwrap_or_else(|| "0000".to_owned());
            print_protocol_line(&format!("bestmove {bestmove}"));
        }));
    }

    /// Cancel any in-flight search and wait for its `bestmove` to go out.
    fn finish_search(&mut self) {
        if let Some(handle) = self.search_thread.take() {
            self.stop_flag.store(true, Ordering::Relaxed);
            let _ = handle.join();
        }
    }
}

fn print_protocol_line(line: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}

fn parse_go_params(line: &str) -> GoParams {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace();
    let _ = tokens.next(); // "go"

    match tokens.next() {
        None => params.depth = Some(DEFAULT_GO_DEPTH),
        Some("depth") => {
            params.depth = tokens
                .next()
                .and_then(|x| x.parse::<u16>().ok())
                .or(Some(DEFAULT_GO_DEPTH));
        }
        // Any other form ("infinite" and friends) searches until stopped.
        Some(_) => params.depth = Some(UNBOUNDED_SEARCH_DEPTH),
    }

    params
}

fn build_engine() -> Box<dyn Engine> {
    Box::new(IterativeEngine::new(DEFAULT_GO_DEPTH))
}
