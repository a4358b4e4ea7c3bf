//! Handlers for the leaderboard endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/score/update` | Body: [`UpdateBody`]; returns [`UpdateOutcome`] |
//! | `GET`  | `/leaderboard` | Optional `?limit=N`; non-numeric values fall back to the default |

use axum::{
  Json,
  body::Bytes,
  extract::{Query, State},
};
use scoreboard_core::{
  LeaderboardEntry, ScoreService, UpdateOutcome, score::ScoreUpdate, store::ScoreStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Update ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /score/update`.
///
/// Absent and `null` fields take their zero value.
#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub id:      Option<String>,
  pub name:    Option<String>,
  #[serde(rename = "addScr")]
  pub add_scr: Option<i64>,
}

impl From<UpdateBody> for ScoreUpdate {
  fn from(b: UpdateBody) -> Self {
    ScoreUpdate {
      id:    b.id.unwrap_or_default(),
      name:  b.name.unwrap_or_default(),
      delta: b.add_scr.unwrap_or_default(),
    }
  }
}

/// `POST /score/update` — body: `{"id":"a","name":"Alice","addScr":10}`
///
/// The body is decoded as JSON whatever its `Content-Type`.
pub async fn update<S>(
  State(service): State<ScoreService<S>>,
  body: Bytes,
) -> Result<Json<UpdateOutcome>, ApiError>
where
  S: ScoreStore + 'static,
{
  let body: UpdateBody = serde_json::from_slice(&body)?;
  let outcome = service
    .update_score(ScoreUpdate::from(body))
    .await
    .map_err(ApiError::storage)?;
  Ok(Json(outcome))
}

// ─── Leaderboard ──────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct LeaderboardParams {
  /// Kept as text so that junk is ignored rather than rejected.
  pub limit: Option<String>,
}

impl LeaderboardParams {
  /// Pick the first `limit` out of raw query pairs; repeats are ignored.
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let limit = pairs
      .into_iter()
      .find_map(|(k, v)| (k == "limit").then_some(v));
    Self { limit }
  }

  /// The requested limit, or `default` when absent or not a non-negative
  /// integer.
  pub fn limit_or(&self, default: usize) -> usize {
    self
      .limit
      .as_deref()
      .and_then(|s| s.parse().ok())
      .unwrap_or(default)
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardBody {
  pub entries: Vec<LeaderboardEntry>,
}

/// `GET /leaderboard[?limit=N]`
pub async fn leaderboard<S>(
  State(service): State<ScoreService<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LeaderboardBody>, ApiError>
where
  S: ScoreStore + 'static,
{
  let limit = LeaderboardParams::from_pairs(pairs).limit_or(service.window());
  let entries = service.top(limit).await.map_err(ApiError::storage)?;
  Ok(Json(LeaderboardBody { entries }))
}
