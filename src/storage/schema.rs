//! Database schema and connection management

use crate::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Database connection manager for cached Sleeper player data
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (or create) the database file at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        info!(path = %path.display(), "opened player database");
        Ok(db)
    }

    /// Create an in-memory database with the full schema (used by tests)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema. Safe to run on every startup.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS player_info (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS player_stats (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL
            );",
        )?;

        // Name lookups filter on a field inside the JSON blob
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_info_full_name
             ON player_info(json_extract(data, '$.full_name'))",
            [],
        )?;

        Ok(())
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err)?;
        Ok(())
    }
}
