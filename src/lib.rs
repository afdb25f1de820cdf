//! Sleeper Fantasy Football Stats Cache
//!
//! Keeps a local SQLite copy of the Sleeper NFL player directory and season
//! stats, restricted to fantasy skill positions, and serves it over a small
//! read-only HTTP API.
//!
//! ## Components
//!
//! - **Ingest** ([`commands::update_player_data`]): fetch both Sleeper feeds,
//!   keep QB/RB/WR/TE players, upsert info and stats in two transactions
//! - **Scheduling** ([`commands::schedule`]): one cycle at startup, then daily
//!   at midnight America/Chicago
//! - **Lookup** ([`commands::player_lookup`]): player name → ID → stats
//! - **Storage** ([`storage`]): two SQLite key/value tables of opaque JSON
//! - **HTTP** ([`server`]): `GET /player/:name/stats` and `GET /player/:name/id`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::{Arc, Mutex};
//! use sleeper_ffl::{
//!     commands::update_player_data::IngestJob, core::LookupCache, sleeper::SleeperClient,
//!     storage::PlayerDatabase, Season,
//! };
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let db = Arc::new(Mutex::new(PlayerDatabase::open(std::path::Path::new("sleeper.db"))?));
//! let client = SleeperClient::new(sleeper_ffl::sleeper::SLEEPER_BASE_URL)?;
//! let job = IngestJob::new(client, db, LookupCache::default(), Season::new(2025));
//!
//! let summary = job.run_cycle().await?;
//! println!("{} players cached", summary.info_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PORT=3000
//! export LEAGUE_YEAR=2025
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod server;
pub mod sleeper;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, Season};
pub use error::{Result, SleeperError};
pub use sleeper::types::StoredDocument;
