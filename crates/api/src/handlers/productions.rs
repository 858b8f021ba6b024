//! Handlers for the `/productions` resource.
//!
//! Read-only views over one production: its seasons, its rating summary and
//! its cast grouped by role.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use myot_core::ticketbook::model::CastMember;
use myot_core::ticketbook::{accumulator, resolver, roles};
use myot_core::types::DbId;
use myot_db::repositories::{CastingRepo, ProductionRepo};

use crate::error::{AppError, AppResult};
use crate::query::RoleOrderParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/productions/{id}/seasons
///
/// Every catalog run of the same show, newest first.
pub async fn get_seasons(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let group = resolver::resolve_seasons(&state.ticketbook(), id)
        .await?
        .ok_or(AppError::not_found("Production", id))?;
    tracing::debug!(production_id = id, seasons = group.seasons.len(), "Resolved seasons");
    Ok(Json(DataResponse { data: group }))
}

/// GET /api/v1/productions/{id}/rating
pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let summary = accumulator::average_rating(&state.ticketbook(), id)
        .await?
        .ok_or(AppError::not_found("Production", id))?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/productions/{id}/roles?order=asc|desc
///
/// Cast assignments grouped by role, actors ordered by birth date.
pub async fn get_roles(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<RoleOrderParams>,
) -> AppResult<impl IntoResponse> {
    ProductionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Production", id))?;

    let castings: Vec<CastMember> = CastingRepo::list_with_actors(&state.pool, id)
        .await?
        .into_iter()
        .map(CastMember::from)
        .collect();
    let groups = roles::group_roles(castings, params.order);
    Ok(Json(DataResponse { data: groups }))
}
