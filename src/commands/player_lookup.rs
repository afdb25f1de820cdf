//! Read side of the player cache: name → ID → stats

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    core::cache::LookupCache,
    error::SleeperError,
    sleeper::types::StoredDocument,
    storage::SharedDatabase,
    PlayerId,
};

/// Why a lookup produced no document.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Stats not found for player ID {player_id}")]
    StatsNotFound { player_id: PlayerId },

    #[error(transparent)]
    Store(#[from] SleeperError),
}

impl<T> From<std::sync::PoisonError<T>> for LookupError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        LookupError::Store(err.into())
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Query service over the shared player store.
#[derive(Clone)]
pub struct PlayerLookup {
    db: SharedDatabase,
    cache: LookupCache,
}

impl PlayerLookup {
    pub fn new(db: SharedDatabase, cache: LookupCache) -> Self {
        Self { db, cache }
    }

    /// Resolve a display name to a player ID.
    ///
    /// Exact, case-sensitive match on `full_name`. When several players share
    /// a name, whichever row SQLite returns first wins.
    pub fn resolve_player_id(&self, name: &str) -> LookupResult<PlayerId> {
        if let Some(player_id) = self.cache.get(name) {
            debug!(name, %player_id, "player ID served from lookup cache");
            return Ok(player_id);
        }

        let (generation, found) = self.read_player_id(name)?;
        match found {
            Some(player_id) => {
                if !self.cache.insert(name, player_id.clone(), generation) {
                    debug!(name, %player_id, "lookup cache cleared mid-resolution; not caching");
                }
                Ok(player_id)
            }
            None => {
                info!(name, "player ID not found for name");
                Err(LookupError::PlayerNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Store lookup for `name`, tagged with the cache generation it was read under.
    fn read_player_id(&self, name: &str) -> LookupResult<(u64, Option<PlayerId>)> {
        let generation = self.cache.generation();
        let found = self.db.lock()?.get_player_id_by_name(name)?;
        Ok((generation, found))
    }

    /// Cached stats blob for a player ID.
    pub fn get_stats(&self, player_id: &PlayerId) -> LookupResult<StoredDocument> {
        let found = self.db.lock()?.get_player_stats(player_id)?;
        found.ok_or_else(|| {
            info!(%player_id, "stats not found for player ID");
            LookupError::StatsNotFound {
                player_id: player_id.clone(),
            }
        })
    }

    /// Resolve a name and fetch that player's stats.
    pub fn lookup_stats_by_name(&self, name: &str) -> LookupResult<StoredDocument> {
        let player_id = self.resolve_player_id(name)?;
        let stats = self.get_stats(&player_id)?;
        info!(name, %player_id, "stats found for player");
        Ok(stats)
    }
}
