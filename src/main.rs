//! Build Log Server - records build metadata behind a small JSON API
//!
//! Architecture:
//! - SeaORM for database access (SQLite by default)
//! - Axum for HTTP API with rate limiting
//! - Tokio for async runtime

mod entity;
mod error;
mod prelude;
mod server;
mod state;
mod sv;
mod utils;

use std::sync::Arc;

use tracing_subscriber::{
  EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{
  prelude::*,
  state::{AppState, Config},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "buildlog=debug,tower_http=debug,sea_orm=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  info!("Starting Build Log Server v{}", env!("CARGO_PKG_VERSION"));

  let config = Config::from_env()?;
  let app = Arc::new(AppState::new(config).await?);

  server::serve(app).await
}
