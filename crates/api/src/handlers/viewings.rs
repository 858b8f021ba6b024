use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use myot_core::types::DbId;
use myot_db::repositories::ViewingRecordRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/viewings/{id}
///
/// One viewing record with its image URLs and cast links.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = ViewingRecordRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("ViewingRecord", id))?;
    Ok(Json(DataResponse { data: detail }))
}
