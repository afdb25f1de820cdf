//! Ingest cycle: refresh the local player store from the Sleeper feeds
//!
//! One cycle fetches the player directory and the season stats, keeps only
//! players at an eligible depth chart position, and upserts their info and
//! stats blobs in two separate transactions.

use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{
    cli::types::Season,
    core::cache::LookupCache,
    sleeper::{
        types::{PlayerFeed, PlayerInfoFields, StoredDocument},
        SleeperClient,
    },
    storage::{PlayerRecord, SharedDatabase},
    Result,
};

/// Counts reported by a completed ingest cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub players_seen: usize,
    pub players_eligible: usize,
    pub info_written: usize,
    pub stats_written: usize,
}

/// Everything one ingest cycle needs: the upstream client, the store it
/// writes to, and the lookup cache it invalidates.
#[derive(Clone)]
pub struct IngestJob {
    client: SleeperClient,
    db: SharedDatabase,
    cache: LookupCache,
    season: Season,
}

impl IngestJob {
    pub fn new(
        client: SleeperClient,
        db: SharedDatabase,
        cache: LookupCache,
        season: Season,
    ) -> Self {
        Self {
            client,
            db,
            cache,
            season,
        }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// Run one ingest cycle, returning the first error encountered.
    ///
    /// Both feeds are fetched before anything is written. The info batch is
    /// committed before the stats batch; if the stats batch fails the info
    /// rows stay updated.
    pub async fn run_cycle(&self) -> Result<IngestSummary> {
        let info = self.client.fetch_players().await?;
        let stats = self.client.fetch_season_stats(self.season).await?;
        debug!(
            players = info.len(),
            stat_lines = stats.len(),
            season = %self.season,
            "fetched Sleeper feeds"
        );

        let db = Arc::clone(&self.db);
        let cache = self.cache.clone();

        // Filtering and SQLite writes are blocking work
        tokio::task::spawn_blocking(move || -> Result<IngestSummary> {
            let info_records = select_eligible(&info);
            let stats_records = select_stats(&info_records, &stats);

            let mut db = db.lock()?;
            let info_written = db.upsert_player_info_batch(&info_records)?;
            let dropped = cache.stats();
            cache.clear();
            debug!(
                entries = dropped.entries,
                capacity = dropped.capacity,
                generation = dropped.generation,
                "lookup cache cleared after info batch"
            );
            let stats_written = db.upsert_player_stats_batch(&stats_records)?;

            Ok(IngestSummary {
                players_seen: info.len(),
                players_eligible: info_records.len(),
                info_written,
                stats_written,
            })
        })
        .await?
    }
}

/// Run one ingest cycle, logging the outcome instead of returning it.
///
/// Any failure leaves the store as it was at the point of failure; the next
/// scheduled cycle is the only retry.
pub async fn handle_update_player_data(job: &IngestJob) -> Option<IngestSummary> {
    match job.run_cycle().await {
        Ok(summary) => {
            info!(
                players_seen = summary.players_seen,
                players_eligible = summary.players_eligible,
                info_written = summary.info_written,
                stats_written = summary.stats_written,
                "player data updated and saved to SQLite"
            );
            Some(summary)
        }
        Err(err) => {
            error!(error = %err, "failed to update player data");
            None
        }
    }
}

/// Keep the info blobs of players at an eligible depth chart position, sorted by ID.
///
/// Entries that are not JSON objects, or whose inspected fields have the
/// wrong type, are treated as ineligible.
pub fn select_eligible(info: &PlayerFeed) -> Vec<PlayerRecord> {
    info.par_iter()
        .filter(|(player_id, doc)| match doc.inspect::<PlayerInfoFields>() {
            Ok(fields) => fields.eligible_position().is_some(),
            Err(err) => {
                debug!(%player_id, error = %err, "skipping unreadable player entry");
                false
            }
        })
        .map(|(player_id, doc)| PlayerRecord::new(player_id.clone(), doc.clone()))
        .collect()
}

/// Pair each eligible player with their stats blob; players without a
/// (non-null) stats entry are skipped.
pub fn select_stats(eligible: &[PlayerRecord], stats: &PlayerFeed) -> Vec<PlayerRecord> {
    eligible
        .iter()
        .filter_map(|record| {
            stats
                .get(&record.player_id)
                .filter(|doc| !doc.is_null())
                .map(|doc: &StoredDocument| PlayerRecord::new(record.player_id.clone(), doc.clone()))
        })
        .collect()
}
