//! alma API server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! SQLite store, seeds it on first startup, and serves the JSON API under
//! `/api`.

use std::{path::PathBuf, sync::Arc};

use alma_store_sqlite::SqliteStore;
use anyhow::Context as _;
use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use clap::Parser;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "alma college directory API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml` merged
/// with `ALMA_*` environment variables. Every field has a default, so a
/// missing config file is fine.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:        String,
  #[serde(default = "default_port")]
  port:        u16,
  #[serde(default = "default_store_path")]
  store_path:  PathBuf,
  /// Origin allowed by CORS (the development frontend).
  #[serde(default = "default_cors_origin")]
  cors_origin: String,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  5000
}

fn default_store_path() -> PathBuf {
  PathBuf::from("colleges.db")
}

fn default_cors_origin() -> String {
  "http://localhost:3000".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ALMA"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the SQLite store and seed it on first startup.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  if store.seed_if_empty().await.context("seeding store")? {
    tracing::info!("seeded initial college data");
  }

  let cors_origin: HeaderValue = server_cfg
    .cors_origin
    .parse()
    .context("cors_origin is not a valid header value")?;

  let cors = CorsLayer::new()
    .allow_origin(AllowOrigin::exact(cors_origin))
    .allow_methods([Method::GET, Method::POST, Method::DELETE])
    .allow_headers([header::CONTENT_TYPE])
    .allow_credentials(true);

  let app = Router::new()
    .nest("/api", alma_api::api_router(Arc::new(store)))
    .layer(cors)
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
