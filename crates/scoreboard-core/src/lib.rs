//! Core types and trait definitions for the scoreboard services.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::ScoreStore`] / [`store::ItemStore`];
//! the HTTP layer talks to them through [`service::ScoreService`].

pub mod item;
pub mod leaderboard;
pub mod score;
pub mod service;
pub mod store;

pub use leaderboard::LeaderboardEntry;
pub use service::{ScoreService, UpdateOutcome};
