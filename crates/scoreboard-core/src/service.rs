//! [`ScoreService`] — leaderboard reads and the score read-modify-write.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
  leaderboard::{self, LeaderboardEntry},
  score::ScoreUpdate,
  store::ScoreStore,
};

/// What a score update did to the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
  /// Whether the upsert affected at least one row.
  pub updated: bool,
  /// Top-N window read before the mutation.
  pub cur_top: Vec<LeaderboardEntry>,
  /// Top-N window read after the commit.
  pub new_top: Vec<LeaderboardEntry>,
  /// Whether `cur_top` and `new_top` differ; see [`leaderboard::top_changed`].
  pub changed: bool,
}

/// Score operations over an injected [`ScoreStore`].
///
/// `window` is the N of the top-N snapshots taken around every update.
/// Cloning is cheap; the store is shared.
pub struct ScoreService<S> {
  store:  Arc<S>,
  window: usize,
}

impl<S> Clone for ScoreService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), window: self.window }
  }
}

impl<S: ScoreStore> ScoreService<S> {
  pub fn new(store: Arc<S>, window: usize) -> Self {
    Self { store, window }
  }

  /// Size of the before/after snapshots, also the default read limit.
  pub fn window(&self) -> usize {
    self.window
  }

  /// Up to `limit` ranked entries, highest score first.
  pub async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, S::Error> {
    let records = self.store.top(limit).await?;
    Ok(leaderboard::rank(records))
  }

  /// Add `update.delta` to a participant's score and report how the top-N
  /// window moved.
  ///
  /// The "before" snapshot is read outside the store's transaction, so a
  /// concurrent update may already be visible in `cur_top`.
  pub async fn update_score(&self, update: ScoreUpdate) -> Result<UpdateOutcome, S::Error> {
    let cur_top = self.top(self.window).await?;

    let id = update.id.clone();
    let delta = update.delta;
    let upserted = self.store.apply(update).await?;

    let new_top = self.top(self.window).await?;
    let changed = leaderboard::top_changed(&cur_top, &new_top);

    tracing::debug!(%id, delta, score = upserted.score, changed, "score updated");

    Ok(UpdateOutcome { updated: upserted.updated, cur_top, new_top, changed })
  }
}
