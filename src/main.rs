//! Entry point: read configuration, start the ingest schedule, serve the API.

use anyhow::{Context, Result};
use clap::Parser;
use sleeper_ffl::{
    cli::ServerArgs,
    commands::{
        player_lookup::PlayerLookup,
        schedule::{spawn_ingest_tasks, DailySchedule},
        update_player_data::IngestJob,
    },
    core::LookupCache,
    server::{self, AppState},
    sleeper::SleeperClient,
    storage::PlayerDatabase,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Run the server.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sleeper_ffl=info,tower_http=info")),
        )
        .init();

    let args = ServerArgs::parse();

    let db_path = args.resolve_db_path()?;
    let db = PlayerDatabase::open(&db_path)
        .with_context(|| format!("opening player database at {}", db_path.display()))?;
    let db = Arc::new(Mutex::new(db));
    let cache = LookupCache::default();

    let client = SleeperClient::new(args.api_base_url.as_str())?;
    info!(
        db_path = %db_path.display(),
        api_base_url = client.base_url(),
        league_year = %args.league_year,
        "starting player cache"
    );
    let job = Arc::new(IngestJob::new(
        client,
        Arc::clone(&db),
        cache.clone(),
        args.league_year,
    ));
    let schedule = DailySchedule::midnight_central()?;
    let tasks = spawn_ingest_tasks(job, schedule);

    let app = server::router(AppState::new(PlayerLookup::new(Arc::clone(&db), cache)));
    let listener = TcpListener::bind(args.listen_addr())
        .await
        .with_context(|| format!("binding {}", args.listen_addr()))?;

    server::serve(listener, app, shutdown_signal()).await?;

    info!("shutting down");
    tasks.abort();
    // Let the aborted tasks drop their store handles
    let _ = tasks.startup.await;
    let _ = tasks.daily.await;

    match Arc::try_unwrap(db) {
        Ok(db) => db
            .into_inner()
            .map_err(|err| anyhow::anyhow!("player database lock poisoned: {err}"))?
            .close()?,
        Err(_) => warn!("player database still in use at shutdown; leaving it to drop"),
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
