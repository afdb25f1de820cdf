//! Route handlers

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::sleeper::types::StoredDocument;
use crate::PlayerId;

/// Body of `GET /player/:name/id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdResponse {
    pub id: PlayerId,
}

pub async fn greeting() -> Html<&'static str> {
    Html("<p>Hello!</p>")
}

/// `GET /player/:name/stats`: the cached stats blob, served verbatim.
pub async fn player_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StoredDocument>, ApiError> {
    let stats = state.lookup.lookup_stats_by_name(&name)?;
    Ok(Json(stats))
}

/// `GET /player/:name/id`
pub async fn player_id(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerIdResponse>, ApiError> {
    let id = state.lookup.resolve_player_id(&name)?;
    info!(name, player_id = %id, "player ID found for name");
    Ok(Json(PlayerIdResponse { id }))
}
