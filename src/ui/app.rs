use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::engine::{Player, Session, SessionEvent};
use crate::error::EngineError;
use crate::matchmaking::{Matchmaker, OnlineStats, SearchStatus};

/// Active screen, mirroring the original game's flow: home form, opponent
/// search, the game itself, end-of-game choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Searching,
    InGame,
    GameOver,
}

pub struct App {
    config: AppConfig,
    seed: Option<u64>,
    screen: Screen,
    name_input: String,
    player_name: String,
    opponent_name: String,
    stats: OnlineStats,
    stats_refreshed: Instant,
    stats_rng: StdRng,
    matchmaker: Option<Matchmaker>,
    search_status: Option<SearchStatus>,
    session: Option<Session>,
    selected_column: usize,
    remaining: u64,
    winning_cells: Vec<(usize, usize)>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, seed: Option<u64>, name: Option<String>) -> Self {
        let mut stats_rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let stats = OnlineStats::sample(&mut stats_rng);
        let remaining = config.game.turn_seconds;

        App {
            config,
            seed,
            screen: Screen::Home,
            name_input: name.unwrap_or_default(),
            player_name: String::new(),
            opponent_name: String::new(),
            stats,
            stats_refreshed: Instant::now(),
            stats_rng,
            matchmaker: None,
            search_status: None,
            session: None,
            selected_column: 3,
            remaining,
            winning_cells: Vec::new(),
            message: None,
            should_quit: false,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.advance(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Drive the time-based pieces: stats refresh, opponent search, the
    /// per-turn countdown.
    fn advance(&mut self, now: Instant) {
        match self.screen {
            Screen::Home => {
                let refresh = self.config.matchmaking.stats_refresh_seconds;
                if now.duration_since(self.stats_refreshed).as_secs() >= refresh {
                    self.stats = OnlineStats::sample(&mut self.stats_rng);
                    self.stats_refreshed = now;
                }
            }
            Screen::Searching => {
                let status = self.matchmaker.as_mut().map(|m| m.poll(now));
                if let Some(status) = status {
                    if let SearchStatus::Ready { opponent } = &status {
                        self.opponent_name = opponent.clone();
                        self.matchmaker = None;
                        self.start_game(now);
                    } else {
                        self.search_status = Some(status);
                    }
                }
            }
            Screen::InGame => {
                if let Some(session) = &mut self.session {
                    let events = session.tick(now);
                    self.apply_session_events(events);
                }
            }
            Screen::GameOver => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Searching => self.handle_search_key(key),
            Screen::InGame => self.handle_game_key(key),
            Screen::GameOver => self.handle_game_over_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                // Same minimum the original form enforced.
                if self.name_input.trim().len() < 2 {
                    self.message = Some("Name must be at least 2 characters".to_string());
                } else {
                    self.player_name = self.name_input.trim().to_string();
                    self.message = None;
                    self.start_search(Instant::now());
                }
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) => {
                if self.name_input.len() < 16 && !c.is_control() {
                    self.name_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            // Cancel the search and return home, like the original's cancel
            // button. Dropping the matchmaker is the whole cancellation.
            self.matchmaker = None;
            self.search_status = None;
            self.screen = Screen::Home;
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        self.message = None;

        let cols = self
            .session
            .as_ref()
            .map(|s| s.board().cols())
            .unwrap_or(crate::engine::DEFAULT_COLS);

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                // Quit the game: the countdown must stop before the session
                // is dropped.
                if let Some(session) = &mut self.session {
                    session.close();
                }
                self.session = None;
                self.screen = Screen::Home;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('r') => {
                self.start_game(Instant::now());
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') => {
                // Play again against the same opponent.
                self.start_game(Instant::now());
            }
            KeyCode::Esc | KeyCode::Char('h') => {
                self.session = None;
                self.name_input.clear();
                self.player_name.clear();
                self.opponent_name.clear();
                self.screen = Screen::Home;
            }
            _ => {}
        }
    }

    fn start_search(&mut self, now: Instant) {
        self.matchmaker = Some(Matchmaker::with_rng(
            self.config.matchmaking.search_seconds,
            self.config.matchmaking.start_pause_seconds,
            self.rng(),
            now,
        ));
        self.search_status = Some(SearchStatus::Searching { elapsed_seconds: 0 });
        self.screen = Screen::Searching;
    }

    fn start_game(&mut self, now: Instant) {
        match Session::with_rng(self.config.session_config(), self.rng(), now) {
            Ok(session) => {
                self.selected_column = session.board().cols() / 2;
                self.remaining = self.config.game.turn_seconds;
                self.winning_cells.clear();
                self.message = None;
                self.session = Some(session);
                self.screen = Screen::InGame;
            }
            Err(err) => {
                // Dimensions were validated at config load, so this should
                // not happen; surface it instead of crashing.
                self.message = Some(err.to_string());
                self.screen = Screen::Home;
            }
        }
    }

    /// Drop a disc in the selected column on behalf of the current player.
    fn drop_disc(&mut self) {
        let now = Instant::now();
        let Some(session) = &mut self.session else {
            return;
        };

        match session.submit_move(self.selected_column, now) {
            Ok(outcome) => self.apply_session_events(outcome.events),
            Err(EngineError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(EngineError::GameNotActive) => {
                self.message = Some("Game is over!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn apply_session_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::TurnChanged { remaining, .. }
                | SessionEvent::TickChanged { remaining } => {
                    self.remaining = remaining;
                }
                SessionEvent::GameWon { player, cells } => {
                    self.winning_cells = cells;
                    let winner = self.display_name(player);
                    self.message = Some(format!("{winner} wins!"));
                    self.screen = Screen::GameOver;
                }
                SessionEvent::GameDraw => {
                    self.message = Some("It's a draw! The grid is full.".to_string());
                    self.screen = Screen::GameOver;
                }
            }
        }
    }

    /// Red is the local player, Yellow the simulated opponent.
    fn display_name(&self, player: Player) -> String {
        match player {
            Player::Red => self.player_name.clone(),
            Player::Yellow => self.opponent_name.clone(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Home => {
                super::lobby_view::render_home(frame, &self.name_input, self.stats, &self.message)
            }
            Screen::Searching => {
                super::lobby_view::render_searching(frame, self.search_status.as_ref())
            }
            Screen::InGame | Screen::GameOver => {
                if let Some(session) = &self.session {
                    super::game_view::render(
                        frame,
                        session,
                        (&self.player_name, &self.opponent_name),
                        self.selected_column,
                        self.remaining,
                        &self.winning_cells,
                        &self.message,
                        self.screen == Screen::GameOver,
                    );
                }
            }
        }
    }
}
