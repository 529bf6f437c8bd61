//! HTTP request handlers

use super::types::{DialogEvent, DialogResponse, ErrorResponse, HealthResponse};
use super::AppState;
use crate::dialog::{dispatch, DialogContext, DialogError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // One dialog turn
        .route("/dialog", post(handle_dialog))
        .route("/health", get(health))
        .with_state(state)
}

async fn handle_dialog(
    State(state): State<AppState>,
    Json(event): Json<DialogEvent>,
) -> Result<Json<DialogResponse>, AppError> {
    tracing::debug!(
        user = event.user_id.as_deref().unwrap_or("-"),
        bot = event.bot.as_ref().map_or("-", |bot| bot.name.as_str()),
        intent = %event.current_intent.name,
        "Received dialog event"
    );

    let ctx = DialogContext::new(state.clock.today());
    let result = dispatch(event.into_turn_request(), &ctx)?;
    let response =
        DialogResponse::from_result(result).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(response))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<DialogError> for AppError {
    fn from(e: DialogError) -> Self {
        tracing::warn!(error = %e, "Rejecting dialog event");
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Failed to encode dialog response");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
