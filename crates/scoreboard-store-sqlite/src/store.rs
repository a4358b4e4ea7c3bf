//! [`SqliteStore`] — the SQLite implementation of [`ScoreStore`] and
//! [`ItemStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use scoreboard_core::{
  item::{Item, NewItem},
  score::{ScoreRecord, ScoreUpdate, Upserted},
  store::{ItemStore, ScoreStore},
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A scoreboard store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "sqlite store ready");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  #[cfg(test)]
  pub(crate) fn connection(&self) -> &tokio_rusqlite::Connection {
    &self.conn
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Score stored under `id`; a `NULL` score reads as zero.
fn read_score(conn: &rusqlite::Connection, id: &str) -> rusqlite::Result<Option<i64>> {
  Ok(
    conn
      .query_row(
        "SELECT scr FROM scores WHERE id = ?1",
        rusqlite::params![id],
        |row| row.get::<_, Option<i64>>(0),
      )
      .optional()?
      .map(Option::unwrap_or_default),
  )
}

/// SQLite reads `LIMIT` as a signed integer; anything past `i64::MAX` is
/// effectively unbounded anyway.
fn sql_limit(limit: usize) -> i64 {
  i64::try_from(limit).unwrap_or(i64::MAX)
}

// ─── ScoreStore impl ─────────────────────────────────────────────────────────

impl ScoreStore for SqliteStore {
  type Error = crate::Error;

  async fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>> {
    let limit = sql_limit(limit);

    let records = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, scr
           FROM scores
           ORDER BY scr DESC
           LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit], |row| {
            Ok(ScoreRecord {
              id:    row.get(0)?,
              name:  row.get::<_, Option<String>>(1)?.unwrap_or_default(),
              score: row.get::<_, Option<i64>>(2)?.unwrap_or_default(),
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(records)
  }

  async fn score_of<'a>(&'a self, id: &'a str) -> Result<Option<i64>> {
    let id = id.to_owned();

    let score = self
      .conn
      .call(move |conn| Ok(read_score(conn, &id)?))
      .await?;

    Ok(score)
  }

  async fn apply(&self, update: ScoreUpdate) -> Result<Upserted> {
    let upserted = self
      .conn
      .call(move |conn| {
        // Dropping `tx` before `commit` rolls everything back.
        let tx = conn.transaction()?;

        let current = read_score(&tx, &update.id)?;
        let score = update.apply_to(current);

        let affected = tx.execute(
          "INSERT INTO scores (id, name, scr)
           VALUES (?1, ?2, ?3)
           ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             scr  = excluded.scr",
          rusqlite::params![update.id, update.name, score],
        )?;

        tx.commit()?;
        Ok(Upserted { updated: affected > 0, score })
      })
      .await?;

    Ok(upserted)
  }
}

// ─── ItemStore impl ──────────────────────────────────────────────────────────

impl ItemStore for SqliteStore {
  type Error = crate::Error;

  async fn list_items(&self) -> Result<Vec<Item>> {
    let items = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, data FROM items ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Item {
              id:   row.get(0)?,
              data: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(items)
  }

  async fn create_item(&self, item: NewItem) -> Result<Item> {
    let created = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (data) VALUES (?1)",
          rusqlite::params![item.data],
        )?;
        Ok(Item { id: conn.last_insert_rowid(), data: item.data })
      })
      .await?;

    Ok(created)
  }
}
