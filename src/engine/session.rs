use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::EngineError;

use super::board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
use super::detector;
use super::player::Player;
use super::timer::{Countdown, CountdownEvent};

/// Lifecycle of a session. The terminal phases absorb: once a game is won
/// or drawn, no transition leaves that phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    WonBy(Player),
    Draw,
}

/// Events emitted for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TurnChanged { player: Player, remaining: u64 },
    TickChanged { remaining: u64 },
    GameWon {
        player: Player,
        cells: Vec<(usize, usize)>,
    },
    GameDraw,
}

/// Parameters fixed at session creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub turn_seconds: u64,
    pub starting_player: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            turn_seconds: 30,
            starting_player: Player::Red,
        }
    }
}

/// The resolved move actually placed, plus whatever events it caused.
/// The row is derived from the column, never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub events: Vec<SessionEvent>,
}

/// A single game in progress: board, turn owner, phase and per-turn
/// countdown.
///
/// All mutation flows through `submit_move`, whether it originates from
/// direct input or from countdown expiry inside `tick`, so a `Session` is
/// never touched from two paths at once. Every call either fully commits a
/// legal transition or leaves the session unchanged.
pub struct Session {
    board: Board,
    current: Player,
    phase: Phase,
    countdown: Countdown,
    turn_duration: Duration,
    rng: StdRng,
}

impl Session {
    /// Create a session with an OS-seeded RNG and start the first turn's
    /// countdown.
    pub fn new(config: SessionConfig, now: Instant) -> Result<Self, EngineError> {
        Self::with_rng(config, StdRng::from_os_rng(), now)
    }

    /// Create a session with a caller-supplied RNG, for deterministic
    /// timeout moves.
    pub fn with_rng(config: SessionConfig, rng: StdRng, now: Instant) -> Result<Self, EngineError> {
        let board = Board::new(config.rows, config.cols)?;
        let turn_duration = Duration::from_secs(config.turn_seconds);
        let mut countdown = Countdown::new();
        countdown.start(turn_duration, now);

        info!(
            rows = config.rows,
            cols = config.cols,
            turn_seconds = config.turn_seconds,
            starting = config.starting_player.name(),
            "session started"
        );

        Ok(Session {
            board,
            current: config.starting_player,
            phase: Phase::InProgress,
            countdown,
            turn_duration,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current turn.
    pub fn remaining_seconds(&self, now: Instant) -> u64 {
        self.countdown.remaining(now)
    }

    /// Columns that still accept a disc.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop a disc for the current player into `column`.
    ///
    /// Rejections (`GameNotActive`, `ColumnOutOfRange`, `ColumnFull`) leave
    /// the session untouched. An accepted move either ends the game (win or
    /// draw, countdown stopped) or hands the turn to the other player with
    /// a fresh countdown.
    pub fn submit_move(&mut self, column: usize, now: Instant) -> Result<MoveOutcome, EngineError> {
        if self.phase != Phase::InProgress {
            return Err(EngineError::GameNotActive);
        }

        let row = self
            .board
            .lowest_empty_row(column)?
            .ok_or(EngineError::ColumnFull(column))?;
        let player = self.current;
        self.board.place(row, column, player.to_cell())?;
        debug!(row, column, player = player.name(), "disc placed");

        let mut events = Vec::new();
        if let Some(cells) = detector::check_win(&self.board, row, column) {
            self.phase = Phase::WonBy(player);
            self.countdown.stop();
            info!(winner = player.name(), "game won");
            events.push(SessionEvent::GameWon { player, cells });
        } else if detector::check_draw(&self.board) {
            self.phase = Phase::Draw;
            self.countdown.stop();
            info!("game drawn");
            events.push(SessionEvent::GameDraw);
        } else {
            self.current = player.other();
            self.countdown.reset(self.turn_duration, now);
            events.push(SessionEvent::TurnChanged {
                player: self.current,
                remaining: self.countdown.remaining(now),
            });
        }

        Ok(MoveOutcome {
            row,
            column,
            player,
            events,
        })
    }

    /// Advance the countdown.
    ///
    /// A whole-second boundary yields `TickChanged`; expiry plays a
    /// uniformly random move among the non-full columns on behalf of the
    /// current player, through the same `submit_move` transition as direct
    /// input. Timeout never ends the game by itself.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }

        match self.countdown.poll(now) {
            CountdownEvent::Idle => Vec::new(),
            CountdownEvent::Tick(remaining) => {
                vec![SessionEvent::TickChanged { remaining }]
            }
            CountdownEvent::Expired => {
                let columns = self.legal_columns();
                // An in-progress game always has at least one open column;
                // a board with none would already be a draw.
                let column = columns[self.rng.random_range(0..columns.len())];
                info!(column, player = self.current.name(), "turn timed out, playing random move");
                match self.submit_move(column, now) {
                    Ok(outcome) => outcome.events,
                    Err(err) => {
                        warn!(%err, column, "forced move rejected");
                        Vec::new()
                    }
                }
            }
        }
    }

    /// Stop the countdown before the session is discarded, so no stale
    /// expiry can touch a defunct game.
    pub fn close(&mut self) {
        self.countdown.stop();
    }
}
