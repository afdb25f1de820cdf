//! Sleeper API client and feed types.

pub mod http;
pub mod types;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{PlayerFeed, PlayerInfoFields, StoredDocument};
