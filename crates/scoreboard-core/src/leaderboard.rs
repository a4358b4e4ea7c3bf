//! Ranked read model and top-N change detection.
//!
//! Entries are never persisted. They are derived from a score-descending
//! sequence of [`ScoreRecord`]s every time the leaderboard is read.

use serde::{Deserialize, Serialize};

use crate::score::ScoreRecord;

/// One row of a leaderboard read.
///
/// Serialised with the capitalised field names the public API has always
/// used: `{"Rank":1,"Id":"a","Name":"Alice","Scr":10}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
  /// 1-based position in descending-score order.
  #[serde(rename = "Rank")]
  pub rank:  usize,
  #[serde(rename = "Id")]
  pub id:    String,
  #[serde(rename = "Name")]
  pub name:  String,
  #[serde(rename = "Scr")]
  pub score: i64,
}

/// Assign ranks to records that are already ordered by score, highest first.
pub fn rank(records: Vec<ScoreRecord>) -> Vec<LeaderboardEntry> {
  records
    .into_iter()
    .enumerate()
    .map(|(i, r)| LeaderboardEntry {
      rank:  i + 1,
      id:    r.id,
      name:  r.name,
      score: r.score,
    })
    .collect()
}

/// Whether two top-N snapshots differ.
///
/// Differs when the lengths differ or when any aligned position has a
/// different id or score. Names are not compared.
pub fn top_changed(before: &[LeaderboardEntry], after: &[LeaderboardEntry]) -> bool {
  if before.len() != after.len() {
    return true;
  }
  before
    .iter()
    .zip(after)
    .any(|(b, a)| b.id != a.id || b.score != a.score)
}
