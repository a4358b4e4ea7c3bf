//! JSON HTTP API for the scoreboard services.
//!
//! Exposes two axum [`Router`]s: one for the leaderboard, backed by a
//! [`ScoreService`], and one for the generic item list, backed by any
//! [`ItemStore`]. Binding and transport are the caller's responsibility.

pub mod error;
pub mod items;
pub mod scores;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use scoreboard_core::{
  ScoreService,
  store::{ItemStore, ScoreStore},
};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Build the leaderboard router: `POST /score/update`, `GET /leaderboard`.
pub fn leaderboard_router<S>(service: ScoreService<S>) -> Router<()>
where
  S: ScoreStore + 'static,
{
  Router::new()
    .route("/score/update", post(scores::update::<S>))
    .route("/leaderboard", get(scores::leaderboard::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}

/// Build the item list router: `GET /items`, `POST /items`.
pub fn items_router<S>(store: Arc<S>) -> Router<()>
where
  S: ItemStore + 'static,
{
  Router::new()
    .route("/items", get(items::list::<S>).post(items::create::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}
