//! Route definitions for `/users/{user_id}`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET  /{user_id}/series/{production_id}        -> get_series
/// GET  /{user_id}/cast-counts/{production_id}   -> get_cast_counts
/// POST /{user_id}/viewings                      -> create_viewing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/series/{production_id}", get(users::get_series))
        .route(
            "/{user_id}/cast-counts/{production_id}",
            get(users::get_cast_counts),
        )
        .route("/{user_id}/viewings", post(users::create_viewing))
}
