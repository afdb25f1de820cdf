//! Storage layer for the Sleeper player cache
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Row and table types
//! - `schema`: Database connection and schema management
//! - `queries`: Batch upserts and point lookups

pub mod models;
pub mod queries;
pub mod schema;


use std::sync::{Arc, Mutex};

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;

/// Store handle shared between the ingest job and request handlers.
pub type SharedDatabase = Arc<Mutex<PlayerDatabase>>;
