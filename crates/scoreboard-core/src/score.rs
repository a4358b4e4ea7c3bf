//! Score records and the write-side input that mutates them.

use serde::{Deserialize, Serialize};

/// A participant's stored score. Identity is `id`; `name` and `score` are
/// overwritten by every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
  pub id:    String,
  pub name:  String,
  pub score: i64,
}

/// Request to add `delta` to the score stored under `id`.
///
/// A missing record counts as score zero, so the first update for an id
/// stores `delta` as its initial score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
  pub id:    String,
  pub name:  String,
  pub delta: i64,
}

impl ScoreUpdate {
  pub fn new(id: impl Into<String>, name: impl Into<String>, delta: i64) -> Self {
    Self { id: id.into(), name: name.into(), delta }
  }

  /// The score that results from applying this update on top of `current`.
  ///
  /// Saturates at the `i64` bounds.
  pub fn apply_to(&self, current: Option<i64>) -> i64 {
    current.unwrap_or(0).saturating_add(self.delta)
  }
}

/// Result of a committed upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upserted {
  /// Whether the write touched at least one row.
  pub updated: bool,
  /// The score now stored for the id.
  pub score:   i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_record_starts_from_zero() {
    let update = ScoreUpdate::new("a", "Alice", 10);
    assert_eq!(update.apply_to(None), 10);
  }

  #[test]
  fn existing_score_is_incremented() {
    let update = ScoreUpdate::new("a", "Alice", -3);
    assert_eq!(update.apply_to(Some(15)), 12);
  }

  #[test]
  fn arithmetic_saturates() {
    let update = ScoreUpdate::new("a", "Alice", 1);
    assert_eq!(update.apply_to(Some(i64::MAX)), i64::MAX);
  }
}
