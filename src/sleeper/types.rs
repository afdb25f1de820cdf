use crate::cli::types::{PlayerId, Position};
use crate::error::{Result, SleeperError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::value::RawValue;
use std::collections::BTreeMap;


/// A JSON document kept exactly as Sleeper sent it.
///
/// Only the handful of fields the ingest filter needs are ever parsed out of
/// it; the text itself is stored and served back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredDocument(Box<RawValue>);

impl StoredDocument {
    /// Wrap a JSON string, validating that it is well-formed.
    pub fn from_json(json: String) -> Result<Self> {
        Ok(Self(RawValue::from_string(json)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub fn is_null(&self) -> bool {
        self.as_str().trim() == "null"
    }

    /// Deserialize a typed view over the document.
    pub fn inspect<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(self.as_str())?)
    }
}

impl PartialEq for StoredDocument {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StoredDocument {}

/// A Sleeper feed: one document per player, keyed by player ID.
pub type PlayerFeed = BTreeMap<PlayerId, StoredDocument>;

/// Parse a feed body, reporting well-formed JSON of the wrong shape separately
/// from syntax errors.
pub fn parse_feed(feed: &str, body: &[u8]) -> Result<PlayerFeed> {
    serde_json::from_slice(body).map_err(|err| {
        if err.is_data() {
            SleeperError::UnexpectedFeed {
                feed: feed.to_string(),
            }
        } else {
            SleeperError::Json(err)
        }
    })
}

/// Fields of a `players/nfl` entry that the ingest job inspects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerInfoFields {
    #[serde(default)]
    pub depth_chart_position: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl PlayerInfoFields {
    /// The eligible position for this player, if any.
    pub fn eligible_position(&self) -> Option<Position> {
        self.depth_chart_position
            .as_deref()
            .and_then(Position::from_depth_chart)
    }
}
