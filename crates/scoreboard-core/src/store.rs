//! Storage traits for scores and items.
//!
//! Implemented by storage backends (e.g. `scoreboard-store-sqlite`). Higher
//! layers depend on these abstractions, not on any concrete backend.

use std::future::Future;

use crate::{
  item::{Item, NewItem},
  score::{ScoreRecord, ScoreUpdate, Upserted},
};

/// Abstraction over the `scores` table.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ScoreStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Up to `limit` records ordered by score, highest first. Ties come back
  /// in whatever order the backend yields them.
  fn top(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<ScoreRecord>, Self::Error>> + Send + '_;

  /// The score stored for `id`, or `None` if no record exists.
  ///
  /// Single-record read primitive. [`ScoreStore::apply`] performs the same
  /// lookup itself, inside its transaction.
  fn score_of<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<i64>, Self::Error>> + Send + 'a;

  /// Look up the current score, add `update.delta`, and upsert the record
  /// with the new score and name, all as one atomic unit.
  ///
  /// On error nothing is persisted.
  fn apply(
    &self,
    update: ScoreUpdate,
  ) -> impl Future<Output = Result<Upserted, Self::Error>> + Send + '_;
}

/// Abstraction over the append-only `items` table.
pub trait ItemStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every stored item in storage order.
  fn list_items(&self) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  /// Insert `item` and return it with its assigned id.
  fn create_item(
    &self,
    item: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;
}
