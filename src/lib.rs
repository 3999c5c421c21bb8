//! # fourline
//!
//! A two-player four-in-a-row game for the terminal, with a simulated
//! online matchmaking flow and a per-turn countdown that plays a random
//! move on timeout. The engine is pure and synchronous; the Ratatui UI
//! drives it through events and a poll loop.
//!
//! ## Modules
//!
//! - [`engine`] — Board, win/draw detection, countdown, session state machine
//! - [`matchmaking`] — Simulated opponent search and online stats
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI: home, search and game screens

pub mod config;
pub mod engine;
pub mod error;
pub mod matchmaking;
pub mod ui;
