//! Leaderboard server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) and
//! `LEADERBOARD_*` environment variables, opens the SQLite score table and
//! serves `POST /score/update` and `GET /leaderboard`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use scoreboard_core::ScoreService;
use scoreboard_server::{Flavor, ServerConfig};
use scoreboard_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Scoreboard leaderboard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  scoreboard_server::init_tracing();

  let cli = Cli::parse();
  let cfg = ServerConfig::load(Flavor::Leaderboard, &cli.config)?;

  let store = SqliteStore::open(&cfg.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.database_path))?;
  tracing::info!(database = %cfg.database_path.display(), window = cfg.default_limit, "store opened");

  let service = ScoreService::new(Arc::new(store), cfg.default_limit);
  let app = scoreboard_api::leaderboard_router(service);

  scoreboard_server::serve(&cfg, app).await
}
