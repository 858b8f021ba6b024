//! Handlers scoped to one user's ticketbook (`/users/{user_id}/...`).
//!
//! Accounts live outside this service; the user id is taken from the path
//! as-is.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use myot_core::error::CoreError;
use myot_core::ticketbook::{accumulator, aggregator};
use myot_core::types::DbId;
use myot_db::models::viewing_record::CreateViewingRecord;
use myot_db::repositories::viewing_record_repo::dedup_ids;
use myot_db::repositories::{CastingRepo, ProductionRepo, VenueRepo, ViewingRecordRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{user_id}/series/{production_id}
///
/// The user's viewings across every season of the production.
pub async fn get_series(
    State(state): State<AppState>,
    Path((user_id, production_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let view = aggregator::get_series(&state.ticketbook(), user_id, production_id)
        .await?
        .ok_or(AppError::not_found("Production", production_id))?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/users/{user_id}/cast-counts/{production_id}
///
/// Map of casting id to the number of the user's viewings it appears in.
pub async fn get_cast_counts(
    State(state): State<AppState>,
    Path((user_id, production_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    ProductionRepo::find_by_id(&state.pool, production_id)
        .await?
        .ok_or(AppError::not_found("Production", production_id))?;

    let counts = accumulator::cast_counts(&state.ticketbook(), user_id, production_id).await?;
    Ok(Json(DataResponse { data: counts }))
}

/// POST /api/v1/users/{user_id}/viewings
///
/// Record a viewing. All references are validated before the write
/// transaction opens.
pub async fn create_viewing(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    body: Result<Json<CreateViewingRecord>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    validate_viewing(&state, &input).await?;

    let record = ViewingRecordRepo::create(&state.pool, user_id, &input).await?;
    tracing::info!(
        viewing_record_id = record.id,
        user_id,
        production_id = record.production_id,
        rating = ?record.rating,
        cast_links = input.casting_ids.len(),
        "Viewing recorded"
    );

    let detail = ViewingRecordRepo::find_detail(&state.pool, record.id)
        .await?
        .ok_or_else(|| AppError::InternalError("viewing record vanished after insert".into()))?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

async fn validate_viewing(state: &AppState, input: &CreateViewingRecord) -> AppResult<()> {
    if let Some(rating) = input.rating {
        accumulator::validate_rating(rating)?;
    }

    if ProductionRepo::find_by_id(&state.pool, input.production_id)
        .await?
        .is_none()
    {
        return Err(CoreError::Validation(format!(
            "production {} does not exist",
            input.production_id
        ))
        .into());
    }

    if let Some(seat_id) = input.seat_id {
        if VenueRepo::find_seat(&state.pool, seat_id).await?.is_none() {
            return Err(CoreError::Validation(format!("seat {seat_id} does not exist")).into());
        }
    }

    if !input.casting_ids.is_empty() {
        let requested = dedup_ids(&input.casting_ids);
        let matched =
            CastingRepo::count_in_production(&state.pool, input.production_id, &requested).await?;
        if matched != requested.len() as i64 {
            return Err(CoreError::Validation(format!(
                "cast assignments must belong to production {}",
                input.production_id
            ))
            .into());
        }
    }

    Ok(())
}
