//! Handler for the save endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use crate::api::dto::response::ApiResponse;
use crate::api::dto::save::SaveRequest;
use crate::error::{AppError, messages};
use crate::state::AppState;

/// Creates an alias for a URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://google.com", "alias": "awesome-project" }
/// ```
///
/// `alias` is optional; when empty or missing a random 6-character alias is
/// generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "awesome-project" }
/// ```
///
/// # Errors
///
/// - 400 `invalid request` if the body is not valid JSON
/// - 400 `field URL is a required field` / `field URL is not a valid URL`
/// - 400 `invalid alias` for aliases that cannot be used as a path segment
/// - 409 `failed to add url` if the alias is taken
/// - 500 `failed to add url` on storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(error = %rejection, "failed to decode request body");
        AppError::bad_request(messages::INVALID_REQUEST)
    })?;

    let alias = state
        .save_service
        .save(request.url, request.alias)
        .await?;

    Ok(Json(ApiResponse::with_alias(alias)))
}
