pub mod health;
pub mod productions;
pub mod users;
pub mod viewings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /productions/{id}/seasons                      season group
/// /productions/{id}/rating                       rating summary
/// /productions/{id}/roles?order=asc|desc         cast grouped by role
///
/// /users/{user_id}/series/{production_id}        viewings grouped by season
/// /users/{user_id}/cast-counts/{production_id}   viewings per cast assignment
/// /users/{user_id}/viewings                      record a viewing (POST)
///
/// /viewings/{id}                                 viewing detail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/productions", productions::router())
        .nest("/users", users::router())
        .nest("/viewings", viewings::router())
}
