//! Handler for alias deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Returns `204 No Content` on success.
///
/// # Errors
///
/// Returns 404 `url not found` if the alias does not exist.
/// Returns 500 `internal error` on storage failure.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.delete_service.delete(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /url` - delete with an empty alias, always 400 `invalid request`.
pub async fn delete_root_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.delete_service.delete("").await?;

    Ok(StatusCode::NO_CONTENT)
}
