//! Route definitions for `/productions`.

use axum::routing::get;
use axum::Router;

use crate::handlers::productions;
use crate::state::AppState;

/// Routes mounted at `/productions`.
///
/// ```text
/// GET /{id}/seasons   -> get_seasons
/// GET /{id}/rating    -> get_rating
/// GET /{id}/roles     -> get_roles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/seasons", get(productions::get_seasons))
        .route("/{id}/rating", get(productions::get_rating))
        .route("/{id}/roles", get(productions::get_roles))
}
