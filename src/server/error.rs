//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::commands::player_lookup::LookupError;

/// JSON body returned with every error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a route handler can return
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            LookupError::PlayerNotFound { .. } => (StatusCode::NOT_FOUND, "Player not found"),
            LookupError::StatsNotFound { .. } => (StatusCode::NOT_FOUND, "Stats not found"),
            LookupError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if let LookupError::Store(err) = &self.0 {
            error!(error = %err, "player store query failed");
        }
        let body = ErrorBody {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
