//! Basic database query operations

use super::{models::*, schema::PlayerDatabase};
use crate::sleeper::types::StoredDocument;
use crate::{PlayerId, Result};
use rusqlite::params;

impl PlayerDatabase {
    /// Insert or replace a batch of player info blobs in a single transaction
    pub fn upsert_player_info_batch(&mut self, records: &[PlayerRecord]) -> Result<usize> {
        self.upsert_batch(PlayerTable::Info, records)
    }

    /// Insert or replace a batch of player stats blobs in a single transaction
    pub fn upsert_player_stats_batch(&mut self, records: &[PlayerRecord]) -> Result<usize> {
        self.upsert_batch(PlayerTable::Stats, records)
    }

    fn upsert_batch(&mut self, table: PlayerTable, records: &[PlayerRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT OR REPLACE INTO {} (id, data) VALUES (?, ?)",
                table.table_name()
            ))?;
            for record in records {
                stmt.execute(params![record.player_id.as_str(), record.data.as_str()])?;
            }
        }
        // Dropping an uncommitted transaction rolls it back
        tx.commit()?;
        Ok(records.len())
    }

    /// Find the ID of the first player whose `full_name` matches exactly
    pub fn get_player_id_by_name(&self, name: &str) -> Result<Option<PlayerId>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id FROM player_info
             WHERE json_extract(data, '$.full_name') = ?
             LIMIT 1",
        )?;

        let result = stmt.query_row(params![name], |row| row.get::<_, String>(0));

        match result {
            Ok(id) => Ok(Some(PlayerId::new(id))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the cached stats blob for a player
    pub fn get_player_stats(&self, player_id: &PlayerId) -> Result<Option<StoredDocument>> {
        self.get_document(PlayerTable::Stats, player_id)
    }

    /// Get the cached info blob for a player
    pub fn get_player_info(&self, player_id: &PlayerId) -> Result<Option<StoredDocument>> {
        self.get_document(PlayerTable::Info, player_id)
    }

    fn get_document(
        &self,
        table: PlayerTable,
        player_id: &PlayerId,
    ) -> Result<Option<StoredDocument>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT data FROM {} WHERE id = ?",
            table.table_name()
        ))?;

        let result = stmt.query_row(params![player_id.as_str()], |row| row.get::<_, String>(0));

        match result {
            Ok(data) => Ok(Some(StoredDocument::from_json(data)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of rows in the info table
    pub fn info_count(&self) -> Result<usize> {
        self.count(PlayerTable::Info)
    }

    /// Number of rows in the stats table
    pub fn stats_count(&self) -> Result<usize> {
        self.count(PlayerTable::Stats)
    }

    fn count(&self, table: PlayerTable) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table.table_name()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// All player IDs in the info table, sorted
    pub fn player_info_ids(&self) -> Result<Vec<PlayerId>> {
        Ok(self
            .records(PlayerTable::Info)?
            .into_iter()
            .map(|r| r.player_id)
            .collect())
    }

    /// All player IDs in the stats table, sorted
    pub fn player_stats_ids(&self) -> Result<Vec<PlayerId>> {
        Ok(self
            .records(PlayerTable::Stats)?
            .into_iter()
            .map(|r| r.player_id)
            .collect())
    }

    /// Every row of a table, sorted by player ID
    pub fn records(&self, table: PlayerTable) -> Result<Vec<PlayerRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, data FROM {} ORDER BY id",
            table.table_name()
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, data) = row?;
            records.push(PlayerRecord::new(
                PlayerId::new(id),
                StoredDocument::from_json(data)?,
            ));
        }
        Ok(records)
    }
}
