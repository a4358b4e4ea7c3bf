//! Async HTTP client wrapping the leaderboard JSON API.

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response};
use scoreboard_core::{LeaderboardEntry, UpdateOutcome};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of `POST /score/update`.
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
  id:      &'a str,
  name:    &'a str,
  #[serde(rename = "addScr")]
  add_scr: i64,
}

#[derive(Debug, Deserialize)]
struct Entries {
  entries: Vec<LeaderboardEntry>,
}

/// Async HTTP client for a running leaderboard server.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  /// `POST /score/update`
  pub async fn update_score(&self, id: &str, name: &str, delta: i64) -> Result<UpdateOutcome> {
    let resp = self
      .client
      .post(self.url("/score/update"))
      .json(&UpdateRequest { id, name, add_scr: delta })
      .send()
      .await
      .context("POST /score/update failed")?;

    let resp = check(resp, "POST /score/update").await?;
    resp.json().await.context("deserialising update outcome")
  }

  /// `POST /score/update` with a delta of one.
  pub async fn bump(&self, id: &str, name: &str) -> Result<UpdateOutcome> {
    self.update_score(id, name, 1).await
  }

  /// `GET /leaderboard?limit=<limit>`
  pub async fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
    let resp = self
      .client
      .get(self.url("/leaderboard"))
      .query(&[("limit", limit.to_string())])
      .send()
      .await
      .context("GET /leaderboard failed")?;

    let resp = check(resp, "GET /leaderboard").await?;
    let body: Entries = resp.json().await.context("deserialising leaderboard")?;
    Ok(body.entries)
  }
}

/// Turn a non-2xx response into an error carrying the status and, when the
/// server sent one, its error message.
async fn check(resp: Response, what: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let detail = resp
    .json::<serde_json::Value>()
    .await
    .ok()
    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
    .unwrap_or_default();
  Err(anyhow!("{what} → {status} {detail}"))
}
