//! Configuration for Products API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::str::FromStr;

pub use core_config::Environment;

/// Which product store backs the API (`PRODUCTS_STORE`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            other => Err(format!(
                "unknown store '{}', expected 'postgres' or 'memory'",
                other
            )),
        }
    }
}

/// Store selection plus whatever that store needs to start
#[derive(Clone, Debug)]
pub enum StoreBackend {
    Postgres(PostgresConfig),
    Memory,
}

impl FromEnv for StoreBackend {
    /// `DATABASE_URL` is only required for the postgres store
    fn from_env() -> Result<Self, ConfigError> {
        match env_parse::<StoreKind>("PRODUCTS_STORE", "postgres")? {
            StoreKind::Postgres => Ok(StoreBackend::Postgres(PostgresConfig::from_env()?)),
            StoreKind::Memory => Ok(StoreBackend::Memory),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreBackend,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            store: StoreBackend::from_env()?,
        })
    }
}
