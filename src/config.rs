use std::env;

use anyhow::{Context, Result, bail};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    Mysql,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub store_backend: StoreBackend,
    /// Only read by the mysql backend.
    pub database_url: Option<String>,
    pub db_max_connections: u32,

    pub log_dir: String,
    pub log_level: String,
}

impl Config {
    /// Reads the process environment; call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store_backend = match var("STORE_BACKEND") {
            Some(v) => v
                .trim()
                .to_lowercase()
                .parse::<StoreBackend>()
                .with_context(|| format!("STORE_BACKEND `{v}` is not one of mysql, memory"))?,
            None => StoreBackend::Mysql,
        };

        let database_url = var("DATABASE_URL");
        if store_backend == StoreBackend::Mysql && database_url.is_none() {
            bail!("DATABASE_URL must be set for the mysql store");
        }

        let db_max_connections = var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;

        Ok(Self {
            server_addr: var("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            store_backend,
            database_url,
            db_max_connections,
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "debug".to_string()),
        })
    }
}
