//! In-memory memo of player name → ID resolutions
//!
//! Resolving a name scans a JSON field of the info table, so successful
//! lookups are kept in a small LRU cache. The ingest job clears the cache
//! whenever it rewrites player info; misses are never cached because the next
//! ingest cycle may add the player.
//!
//! Every clear bumps a generation counter. A resolution is only inserted if the
//! generation it was read under is still current, so an ID read from the store
//! just before an ingest cannot land in the cache after that ingest's clear.

use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

use crate::PlayerId;

/// Default number of names kept in memory.
pub const DEFAULT_LOOKUP_CAPACITY: usize = 1024;

/// Cache statistics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub generation: u64,
}

struct CacheState {
    ids: LruCache<String, PlayerId>,
    generation: u64,
}

/// Thread-safe LRU cache from exact player name to player ID.
#[derive(Clone)]
pub struct LookupCache {
    state: Arc<Mutex<CacheState>>,
}

impl LookupCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: Arc::new(Mutex::new(CacheState {
                ids: LruCache::new(capacity),
                generation: 0,
            })),
        }
    }

    /// Cached ID for `name`, if present
    pub fn get(&self, name: &str) -> Option<PlayerId> {
        // A poisoned cache is treated as empty; the store stays authoritative
        let mut state = self.state.lock().ok()?;
        state.ids.get(name).cloned()
    }

    /// Current generation; read it before querying the store and hand it
    /// back to [`LookupCache::insert`].
    pub fn generation(&self) -> u64 {
        match self.state.lock() {
            Ok(state) => state.generation,
            Err(poisoned) => poisoned.into_inner().generation,
        }
    }

    /// Cache a resolution read under `generation`.
    ///
    /// Returns `false` and caches nothing if the cache was cleared since.
    pub fn insert(&self, name: &str, player_id: PlayerId, generation: u64) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        if state.generation != generation {
            return false;
        }
        state.ids.put(name.to_string(), player_id);
        true
    }

    /// Drop every cached resolution and start a new generation
    pub fn clear(&self) {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.ids.clear();
        state.generation = state.generation.wrapping_add(1);
    }

    pub fn stats(&self) -> CacheStats {
        self.state
            .lock()
            .map(|state| CacheStats {
                entries: state.ids.len(),
                capacity: state.ids.cap().get(),
                generation: state.generation,
            })
            .unwrap_or_default()
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_CAPACITY)
    }
}
