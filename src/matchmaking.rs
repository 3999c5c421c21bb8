//! Simulated matchmaking: opponent search resolves after a fixed delay to a
//! name drawn from a static pool, followed by a short start pause. Also
//! hosts the cosmetic "online stats" sampling shown on the home screen.
//! There is no network anywhere in here.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Names a simulated opponent can get.
pub const OPPONENT_POOL: [&str; 15] = [
    "Alex", "Sam", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Quinn", "Reese",
    "Skylar", "Phoenix", "Cameron", "Blake", "Dakota",
];

/// Where an opponent search currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Still looking.
    Searching { elapsed_seconds: u64 },
    /// Opponent assigned; the game starts after a short pause.
    Found { opponent: String },
    /// Pause elapsed; the caller should start the game now.
    Ready { opponent: String },
}

/// A single simulated opponent search.
///
/// Poll-driven like the engine countdown; cancelling a search is simply
/// dropping the matchmaker.
pub struct Matchmaker {
    started: Instant,
    search_duration: Duration,
    start_pause: Duration,
    opponent: Option<String>,
    rng: StdRng,
}

impl Matchmaker {
    pub fn start(search_seconds: u64, start_pause_seconds: u64, now: Instant) -> Self {
        Self::with_rng(search_seconds, start_pause_seconds, StdRng::from_os_rng(), now)
    }

    pub fn with_rng(
        search_seconds: u64,
        start_pause_seconds: u64,
        rng: StdRng,
        now: Instant,
    ) -> Self {
        Matchmaker {
            started: now,
            search_duration: Duration::from_secs(search_seconds),
            start_pause: Duration::from_secs(start_pause_seconds),
            opponent: None,
            rng,
        }
    }

    /// The assigned opponent, once the search has resolved.
    pub fn opponent(&self) -> Option<&str> {
        self.opponent.as_deref()
    }

    pub fn poll(&mut self, now: Instant) -> SearchStatus {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < self.search_duration {
            return SearchStatus::Searching {
                elapsed_seconds: elapsed.as_secs(),
            };
        }

        let opponent = match &self.opponent {
            Some(name) => name.clone(),
            None => {
                let name =
                    OPPONENT_POOL[self.rng.random_range(0..OPPONENT_POOL.len())].to_string();
                info!(opponent = %name, "opponent found");
                self.opponent = Some(name.clone());
                name
            }
        };

        if elapsed < self.search_duration + self.start_pause {
            SearchStatus::Found { opponent }
        } else {
            SearchStatus::Ready { opponent }
        }
    }
}

/// Simulated "players online / games active" numbers for the home screen.
/// Pure cosmetics, unrelated to any game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnlineStats {
    pub players_online: u32,
    pub games_active: u32,
}

impl OnlineStats {
    pub fn sample(rng: &mut StdRng) -> Self {
        OnlineStats {
            players_online: rng.random_range(10..60),
            games_active: rng.random_range(5..25),
        }
    }
}
