//! Error types for the Sleeper fantasy football cache

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid schedule expression: {0}")]
    Schedule(#[from] cron::error::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Sleeper feed {feed} was not a JSON object keyed by player ID")]
    UnexpectedFeed { feed: String },

    #[error("Player store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Background task failed: {message}")]
    Task { message: String },

    #[error("Could not determine a location for the player database")]
    NoDataDir,
}

impl<T> From<std::sync::PoisonError<T>> for SleeperError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        SleeperError::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for SleeperError {
    fn from(err: tokio::task::JoinError) -> Self {
        SleeperError::Task {
            message: err.to_string(),
        }
    }
}
