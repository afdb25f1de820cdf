//! Server configuration, read from the environment with CLI flag overrides.

pub mod types;

use crate::error::{Result, SleeperError};
use crate::sleeper::http::SLEEPER_BASE_URL;
use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use types::Season;

/// Port used when neither `PORT` nor `--port` is given.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper fantasy football stats cache")]
pub struct ServerArgs {
    /// HTTP listen port (or set `PORT`).
    #[clap(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Season year requested from the stats feed (or set `LEAGUE_YEAR`).
    #[clap(long, env = "LEAGUE_YEAR", default_value_t = Season::default())]
    pub league_year: Season,

    /// SQLite database file (or set `SLEEPER_DB_PATH`).
    ///
    /// Defaults to `sleeper.db` under the user cache directory.
    #[clap(long, env = "SLEEPER_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Base URL of the Sleeper API (or set `SLEEPER_API_BASE_URL`).
    #[clap(long, env = "SLEEPER_API_BASE_URL", default_value = SLEEPER_BASE_URL)]
    pub api_base_url: String,
}

impl ServerArgs {
    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Resolve the database location, falling back to the user cache directory.
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        let cache_dir = dirs::cache_dir().ok_or(SleeperError::NoDataDir)?;
        Ok(cache_dir.join("sleeper-ffl").join("sleeper.db"))
    }
}
