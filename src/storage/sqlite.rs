use crate::model::{FamilyRecord, RewriteResult, StorageError};
use crate::storage::FamilyStore;
use rusqlite::{params, Connection, OpenFlags, Row};
use std::time::Duration;
use tracing::{debug, info};

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens an existing catalog database read-write. The file is never
    /// created: a missing database is a connection failure.
    pub fn open(database_url: &str, busy_timeout: Duration) -> Result<Self, StorageError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(database_url, flags)?;
        conn.busy_timeout(busy_timeout)?;
        debug!("Opened database {}", database_url);
        Ok(Self { conn })
    }

    /// Rows whose title contains "ISO" or "DIN" (case-sensitive), by id.
    pub fn fetch_candidates_sync(&self) -> Result<Vec<FamilyRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title FROM family
             WHERE instr(title, 'ISO') > 0 OR instr(title, 'DIN') > 0
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], Self::map_family)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        info!("Fetched {} candidate families", records.len());
        Ok(records)
    }

    /// Writes every change in one transaction. Any failure, including an id
    /// that matches no row, rolls back the whole batch.
    pub fn apply_updates_sync(&mut self, changes: &[RewriteResult]) -> Result<usize, StorageError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("UPDATE family SET title = ?1 WHERE id = ?2")?;
            for change in changes {
                let updated = stmt.execute(params![&change.proposed_title, change.family_id])?;
                if updated == 0 {
                    return Err(StorageError::NotFound(change.family_id));
                }
            }
        }
        tx.commit()?;

        info!("Committed {} title updates", changes.len());
        Ok(changes.len())
    }

    fn map_family(row: &Row) -> Result<FamilyRecord, rusqlite::Error> {
        Ok(FamilyRecord {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    }
}

#[async_trait::async_trait]
impl FamilyStore for SqliteStorage {
    async fn fetch_candidates(&mut self) -> Result<Vec<FamilyRecord>, StorageError> {
        self.fetch_candidates_sync()
    }

    async fn apply_updates(&mut self, changes: &[RewriteResult]) -> Result<usize, StorageError> {
        self.apply_updates_sync(changes)
    }
}
