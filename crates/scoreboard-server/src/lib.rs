//! Process plumbing shared by the `leaderboard` and `items` binaries:
//! configuration loading, tracing setup and the serve loop.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Which of the two services a binary runs. Decides the defaults and the
/// environment variable prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
  Leaderboard,
  Items,
}

impl Flavor {
  pub fn env_prefix(self) -> &'static str {
    match self {
      Flavor::Leaderboard => "LEADERBOARD",
      Flavor::Items => "ITEMS",
    }
  }

  fn default_port(self) -> i64 {
    match self {
      Flavor::Leaderboard => 9090,
      Flavor::Items => 8080,
    }
  }

  fn default_database(self) -> &'static str {
    match self {
      Flavor::Leaderboard => "db.sqlite",
      Flavor::Items => "example.sqlite",
    }
  }
}

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults for the [`Flavor`],
/// an optional TOML file, then `<PREFIX>_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  /// Leaderboard read limit when none is given, and the size of the top-N
  /// window compared around every score update.
  pub default_limit: usize,
}

impl ServerConfig {
  /// Load configuration from `file` (if it exists) and the process
  /// environment.
  pub fn load(flavor: Flavor, file: &Path) -> anyhow::Result<Self> {
    Self::load_from(
      flavor,
      file,
      config::Environment::with_prefix(flavor.env_prefix()),
    )
  }

  /// Like [`ServerConfig::load`] with an explicit environment source.
  pub fn load_from(
    flavor: Flavor,
    file:   &Path,
    env:    config::Environment,
  ) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", flavor.default_port())?
      .set_default("database_path", flavor.default_database())?
      .set_default("default_limit", 10_i64)?
      .add_source(config::File::from(file).required(false))
      .add_source(env)
      .build()
      .context("failed to read config file")?;

    let mut cfg: ServerConfig = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;
    cfg.database_path = expand_tilde(&cfg.database_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Runtime ──────────────────────────────────────────────────────────────────

/// Install the global `fmt` subscriber. `RUST_LOG` overrides the `INFO`
/// default.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();
}

/// Bind `config.address()` and serve `app` until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, app: Router) -> anyhow::Result<()> {
  let address = config.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server shut down");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::warn!("cannot listen for Ctrl+C: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::warn!("cannot listen for SIGTERM: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
    _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn env(flavor: Flavor, vars: &[(&str, &str)]) -> config::Environment {
    let map: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    config::Environment::with_prefix(flavor.env_prefix()).source(Some(map))
  }

  fn missing_file() -> PathBuf {
    std::env::temp_dir().join("scoreboard-server-no-such-config.toml")
  }

  #[test]
  fn leaderboard_defaults() {
    let cfg =
      ServerConfig::load_from(Flavor::Leaderboard, &missing_file(), env(Flavor::Leaderboard, &[]))
        .unwrap();
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.database_path, PathBuf::from("db.sqlite"));
    assert_eq!(cfg.default_limit, 10);
    assert_eq!(cfg.address(), "0.0.0.0:9090");
  }

  #[test]
  fn items_defaults() {
    let cfg = ServerConfig::load_from(Flavor::Items, &missing_file(), env(Flavor::Items, &[]))
      .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_path, PathBuf::from("example.sqlite"));
  }

  #[test]
  fn environment_overrides_defaults() {
    let vars = [
      ("LEADERBOARD_PORT", "9999"),
      ("LEADERBOARD_DEFAULT_LIMIT", "3"),
      ("LEADERBOARD_DATABASE_PATH", "/tmp/scores.sqlite"),
    ];
    let cfg = ServerConfig::load_from(
      Flavor::Leaderboard,
      &missing_file(),
      env(Flavor::Leaderboard, &vars),
    )
    .unwrap();
    assert_eq!(cfg.port, 9999);
    assert_eq!(cfg.default_limit, 3);
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/scores.sqlite"));
  }

  #[test]
  fn file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("scoreboard-server-{}.toml", std::process::id()));
    std::fs::write(&path, "port = 7000\nhost = \"127.0.0.1\"\n").unwrap();

    let cfg =
      ServerConfig::load_from(Flavor::Items, &path, env(Flavor::Items, &[])).unwrap();
    assert_eq!(cfg.address(), "127.0.0.1:7000");
    assert_eq!(cfg.database_path, PathBuf::from("example.sqlite"));

    std::fs::remove_file(&path).ok();
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/scores.sqlite")),
      PathBuf::from(home).join("scores.sqlite")
    );
    assert_eq!(expand_tilde(Path::new("db.sqlite")), PathBuf::from("db.sqlite"));
  }
}
