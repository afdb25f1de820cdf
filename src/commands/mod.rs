//! Ingest, scheduling, and lookup operations over the player store

pub mod player_lookup;
pub mod schedule;
pub mod update_player_data;
