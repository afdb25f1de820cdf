//! ID types for Sleeper players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for Sleeper player IDs.
///
/// Sleeper keys players by string: most are numeric (`"4046"`) but team
/// defenses use abbreviations (`"TEN"`), so the ID is never parsed as a number.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::PlayerId;
///
/// let id = PlayerId::new("4046");
/// assert_eq!(id.as_str(), "4046");
/// assert_eq!(id.to_string(), "4046");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
