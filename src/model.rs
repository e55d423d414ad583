// Core structs: FamilyRecord, RewriteResult, error types
use thiserror::Error;

/// One row of the `family` table as fetched for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRecord {
    pub id: i64,
    pub title: String,
}

/// A title whose corrected form differs from the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub family_id: i64,
    pub original_title: String,
    pub proposed_title: String,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
    #[error("family {0} not found, no row updated")]
    NotFound(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database unreachable after {attempts} attempt(s): {source}")]
    Connect {
        attempts: u32,
        #[source]
        source: StorageError,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),
    #[error("prompt task failed: {0}")]
    Prompt(#[from] tokio::task::JoinError),
}
