//! Shared HTTP client construction for upstream feed requests

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// User agent sent with every upstream request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the client used for all Sleeper requests.
///
/// Sleeper's public API needs no credentials; every request just asks for JSON.
pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}
