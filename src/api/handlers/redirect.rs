//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, messages};
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Answers `302 Found` with the target in `Location`. The target itself is
/// never fetched or followed.
///
/// # Errors
///
/// Returns 404 `url not found` if the alias does not exist.
/// Returns 500 `internal error` on storage failure or if the stored target
/// is not a valid header value.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, &alias).await
}

/// `GET /` - resolve with an empty alias, always 400 `invalid request`.
pub async fn redirect_root_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    redirect_to(&state, "").await
}

async fn redirect_to(state: &AppState, alias: &str) -> Result<Response, AppError> {
    let target = state.resolve_service.resolve(alias).await?;

    let location = HeaderValue::from_str(&target).map_err(|e| {
        tracing::error!(alias = %alias, error = %e, "stored url is not a valid Location");
        AppError::internal(messages::INTERNAL_ERROR)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
