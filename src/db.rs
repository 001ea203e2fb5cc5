use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use crate::config::{Config, StoreBackend};
use crate::store::{EmployeeStore, MemoryEmployeeStore, MySqlEmployeeStore};

/// Opens the store selected by `config`. Called once at startup; the handle
/// is shared by every worker until `EmployeeStore::close`.
pub async fn init_store(config: &Config) -> Result<Arc<dyn EmployeeStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory employee store, records are not persisted");
            Ok(Arc::new(MemoryEmployeeStore::new()))
        }
        StoreBackend::Mysql => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            let pool = MySqlPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await
                .context("Failed to connect to database")?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            info!("Connected to MySQL employee store");
            Ok(Arc::new(MySqlEmployeeStore::new(pool)))
        }
    }
}
