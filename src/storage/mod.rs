// Storage module: the family table gateway and its connection policy.

pub mod retry;
pub mod sqlite;

use crate::config::AppConfig;
use crate::model::{AppError, FamilyRecord, RewriteResult, StorageError};
use tracing::info;

pub use retry::connect_with_retry;
pub use sqlite::SqliteStorage;

#[async_trait::async_trait]
pub trait FamilyStore: Send {
    /// Families whose title mentions ISO or DIN, in a stable order.
    async fn fetch_candidates(&mut self) -> Result<Vec<FamilyRecord>, StorageError>;
    /// Applies all changes atomically and returns how many rows were updated.
    async fn apply_updates(&mut self, changes: &[RewriteResult]) -> Result<usize, StorageError>;
}

/// Opens the configured database, retrying with exponential backoff.
pub async fn connect(config: &AppConfig) -> Result<SqliteStorage, AppError> {
    let storage = connect_with_retry(&config.retry, |attempt| {
        info!("Connecting to database (attempt {})...", attempt);
        let opened = SqliteStorage::open(&config.database_url, config.busy_timeout());
        async move { opened }
    })
    .await?;
    info!("Database connection established.");
    Ok(storage)
}
