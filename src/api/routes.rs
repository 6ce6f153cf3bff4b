//! Routes for the `/url` resource.

use crate::api::handlers::{delete_handler, delete_root_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes.
///
/// # Endpoints
///
/// - `POST   /url`           - Save a URL under an alias
/// - `DELETE /url/{alias}`   - Delete an alias
/// - `DELETE /url`           - Empty alias, rejected with `invalid request`
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler).delete(delete_root_handler))
        .route("/url/{alias}", delete(delete_handler))
}
