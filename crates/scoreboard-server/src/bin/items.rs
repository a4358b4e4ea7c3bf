//! Item list server binary.
//!
//! Same configuration sources as `leaderboard`, with the `ITEMS_` prefix.
//! Serves `GET /items` and `POST /items`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use scoreboard_server::{Flavor, ServerConfig};
use scoreboard_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Scoreboard item list server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  scoreboard_server::init_tracing();

  let cli = Cli::parse();
  let cfg = ServerConfig::load(Flavor::Items, &cli.config)?;

  let store = SqliteStore::open(&cfg.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.database_path))?;
  tracing::info!(database = %cfg.database_path.display(), "store opened");

  let app = scoreboard_api::items_router(Arc::new(store));

  scoreboard_server::serve(&cfg, app).await
}
