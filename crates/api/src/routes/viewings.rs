use axum::routing::get;
use axum::Router;

use crate::handlers::viewings;
use crate::state::AppState;

/// Routes mounted at `/viewings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(viewings::get_by_id))
}
