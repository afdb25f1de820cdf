//! Read-only HTTP API over the player store.

pub mod error;
pub mod routes;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::commands::player_lookup::PlayerLookup;
use crate::Result;

pub use error::{ApiError, ErrorBody};
pub use routes::PlayerIdResponse;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub lookup: PlayerLookup,
}

impl AppState {
    pub fn new(lookup: PlayerLookup) -> Self {
        Self { lookup }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD]);

    Router::new()
        .route("/", get(routes::greeting))
        .route("/player/:name/stats", get(routes::player_stats))
        .route("/player/:name/id", get(routes::player_id))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
