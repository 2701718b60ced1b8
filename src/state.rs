use std::{env, net::IpAddr, str::FromStr};

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use crate::{prelude::*, sv};

#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub host: IpAddr,
  pub port: u16,
  /// Seconds between replenished rate limit tokens
  pub rate_period_secs: u64,
  pub rate_burst: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_url: String::from("sqlite:builds.db?mode=rwc"),
      host: IpAddr::from([0, 0, 0, 0]),
      port: 5000,
      rate_period_secs: 2,
      rate_burst: 100,
    }
  }
}

fn var<T>(key: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  parse_var(key, env::var(key).ok(), default)
}

fn parse_var<T>(
  key: &str,
  raw: Option<String>,
  default: T,
) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match raw {
    Some(raw) if !raw.trim().is_empty() => {
      raw.trim().parse().with_context(|| format!("Invalid {key}: `{raw}`"))
    }
    _ => Ok(default),
  }
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    let default = Self::default();

    Ok(Self {
      database_url: var("DATABASE_URL", default.database_url)?,
      host: var("HOST", default.host)?,
      port: var("PORT", default.port)?,
      rate_period_secs: var(
        "RATE_LIMIT_PERIOD_SECS",
        default.rate_period_secs,
      )?,
      rate_burst: var("RATE_LIMIT_BURST", default.rate_burst)?,
    })
  }
}

pub struct Services<'a> {
  pub build: sv::Build<'a>,
}

pub struct AppState {
  pub db: DatabaseConnection,
  pub config: Config,
}

impl AppState {
  pub async fn new(config: Config) -> anyhow::Result<Self> {
    info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
      .await
      .context("Failed to connect to database")?;

    info!("Running migrations...");
    Migrator::up(&db, None).await.context("Failed to run migrations")?;

    Ok(Self::with_db(db, config))
  }

  pub fn with_db(db: DatabaseConnection, config: Config) -> Self {
    Self { db, config }
  }

  pub fn sv(&self) -> Services<'_> {
    Services { build: sv::Build::new(&self.db) }
  }
}
