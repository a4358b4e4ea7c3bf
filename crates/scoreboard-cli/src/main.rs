//! `scoreboard` — command-line client for the leaderboard server.
//!
//! # Usage
//!
//! ```text
//! scoreboard update alice Alice 10
//! scoreboard bump alice Alice
//! scoreboard top --limit 3
//! scoreboard join Alice
//! scoreboard --url http://scores.local:9090 top
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::ApiClient;
use scoreboard_core::{LeaderboardEntry, UpdateOutcome};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:9090";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "scoreboard", about = "Client for the scoreboard leaderboard server")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the leaderboard server (default: http://localhost:9090).
  #[arg(long, env = "SCOREBOARD_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Add DELTA to a participant's score.
  Update {
    id:    String,
    name:  String,
    #[arg(allow_negative_numbers = true)]
    delta: i64,
  },
  /// Add one to a participant's score.
  Bump { id: String, name: String },
  /// Print the top of the leaderboard.
  Top {
    #[arg(short, long, default_value_t = 5)]
    limit: usize,
  },
  /// Register a new participant under a generated id, score one point for
  /// them and print the leaderboard.
  Join {
    name: String,
    #[arg(short, long, default_value_t = 5)]
    limit: usize,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag / env var overrides config file, which overrides the default.
  let base_url = args
    .url
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| DEFAULT_URL.to_string());
  tracing::debug!(%base_url, "using server");

  let client = ApiClient::new(base_url)?;

  match args.command {
    Command::Update { id, name, delta } => {
      let outcome = client.update_score(&id, &name, delta).await?;
      print_outcome(&outcome);
    }
    Command::Bump { id, name } => {
      let outcome = client.bump(&id, &name).await?;
      print_outcome(&outcome);
    }
    Command::Top { limit } => {
      print_entries(&client.leaderboard(limit).await?);
    }
    Command::Join { name, limit } => {
      let id = format!("user_{}", uuid::Uuid::new_v4().simple());
      client.update_score(&id, &name, 0).await?;
      client.bump(&id, &name).await?;
      println!("joined as {id}");
      print_entries(&client.leaderboard(limit).await?);
    }
  }

  Ok(())
}

fn format_entry(entry: &LeaderboardEntry) -> String {
  format!("{}. {} - {}", entry.rank, entry.name, entry.score)
}

fn print_entries(entries: &[LeaderboardEntry]) {
  if entries.is_empty() {
    println!("(leaderboard is empty)");
  }
  for entry in entries {
    println!("{}", format_entry(entry));
  }
}

fn print_outcome(outcome: &UpdateOutcome) {
  println!(
    "updated: {}, leaderboard changed: {}",
    outcome.updated, outcome.changed
  );
  print_entries(&outcome.new_top);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entry_line_format() {
    let entry = LeaderboardEntry { rank: 2, id: "b".into(), name: "Bob".into(), score: 20 };
    assert_eq!(format_entry(&entry), "2. Bob - 20");
  }

  #[test]
  fn parses_negative_delta() {
    let args = Args::try_parse_from(["scoreboard", "update", "a", "Alice", "-5"]).unwrap();
    match args.command {
      Command::Update { delta, .. } => assert_eq!(delta, -5),
      other => panic!("unexpected command {other:?}"),
    }
  }

  #[test]
  fn top_limit_defaults_to_five() {
    let args = Args::try_parse_from(["scoreboard", "top"]).unwrap();
    assert!(matches!(args.command, Command::Top { limit: 5 }));
  }
}
