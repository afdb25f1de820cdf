use reqwest::Client;
use tracing::debug;

use crate::{
    cli::types::Season,
    core::http::build_http_client,
    sleeper::types::{parse_feed, PlayerFeed},
    Result,
};


/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin client over the two Sleeper feeds the cache is built from.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
}

impl SleeperClient {
    /// Create a client against `base_url` (normally [`SLEEPER_BASE_URL`]).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(build_http_client()?, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full player directory: `GET /players/nfl`.
    pub async fn fetch_players(&self) -> Result<PlayerFeed> {
        self.fetch_feed("players/nfl").await
    }

    /// Fetch regular-season stats for every player: `GET /stats/nfl/regular/{season}`.
    pub async fn fetch_season_stats(&self, season: Season) -> Result<PlayerFeed> {
        self.fetch_feed(&format!("stats/nfl/regular/{}", season))
            .await
    }

    async fn fetch_feed(&self, feed: &str) -> Result<PlayerFeed> {
        let url = format!("{}/{}", self.base_url, feed);
        debug!(%url, "fetching Sleeper feed");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let parsed = parse_feed(feed, &body)?;
        debug!(feed, entries = parsed.len(), bytes = body.len(), "parsed Sleeper feed");
        Ok(parsed)
    }
}
