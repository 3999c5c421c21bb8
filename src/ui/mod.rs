//! Terminal UI: home and matchmaking screens plus the game view, driving
//! the engine through keyboard input and a 100 ms poll loop.

mod app;
mod game_view;
mod lobby_view;

pub use app::{App, Screen};
