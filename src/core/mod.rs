//! Core utilities for the Sleeper player cache
//!
//! - `cache`: In-memory name → ID lookup cache
//! - `http`: Shared upstream HTTP client construction

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::LookupCache;
pub use http::build_http_client;
