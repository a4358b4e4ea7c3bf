//! SQL schema for the scoreboard SQLite store.
//!
//! Column names are shared with databases written by earlier releases, so an
//! existing `db.sqlite` opens unchanged.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS scores (
    id    TEXT NOT NULL PRIMARY KEY,
    name  TEXT,
    scr   INTEGER
);

-- Items are append-only.
CREATE TABLE IF NOT EXISTS items (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    data  TEXT
);
";
