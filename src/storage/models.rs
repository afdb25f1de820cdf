//! Data models for the storage layer

use crate::cli::types::PlayerId;
use crate::sleeper::types::StoredDocument;
use serde::Serialize;

/// One row of either player table: a player ID and its opaque JSON blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub data: StoredDocument,
}

impl PlayerRecord {
    pub fn new(player_id: PlayerId, data: StoredDocument) -> Self {
        Self { player_id, data }
    }
}

/// The two tables of the player store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTable {
    Info,
    Stats,
}

impl PlayerTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            PlayerTable::Info => "player_info",
            PlayerTable::Stats => "player_stats",
        }
    }
}
