//! Repository for the `viewing_records` table and its image/cast children.

use myot_core::types::DbId;
use sqlx::PgPool;

use crate::models::viewing_record::{
    CreateViewingRecord, SeriesViewingRow, ViewingRecord, ViewingRecordDetail,
};
use crate::repositories::{CastingRepo, ProductionRepo};

/// Column list for the `viewing_records` table.
const COLUMNS: &str = "id, user_id, production_id, seat_id, viewed_on, show_time, note, \
    rating, created_at, updated_at";

pub struct ViewingRecordRepo;

impl ViewingRecordRepo {
    /// Record a viewing for `user_id`.
    ///
    /// Inserts the record, its images and cast links, bumps the linked
    /// castings' `performance_count` and, when a rating is present, the
    /// production's rating totals, all in one transaction. Any failure
    /// (including a seat deleted after validation, surfacing as a foreign
    /// key violation) rolls every write back.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateViewingRecord,
    ) -> Result<ViewingRecord, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO viewing_records \
                (user_id, production_id, seat_id, viewed_on, show_time, note, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, ViewingRecord>(&insert_query)
            .bind(user_id)
            .bind(input.production_id)
            .bind(input.seat_id)
            .bind(input.viewed_on)
            .bind(input.show_time)
            .bind(&input.note)
            .bind(input.rating)
            .fetch_one(&mut *tx)
            .await?;

        for (position, url) in input.image_urls.iter().enumerate() {
            sqlx::query(
                "INSERT INTO viewing_images (viewing_record_id, url, sort_order) \
                 VALUES ($1, $2, $3)",
            )
            .bind(record.id)
            .bind(url)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        let casting_ids = dedup_ids(&input.casting_ids);
        CastingRepo::link_viewing(&mut tx, record.id, &casting_ids).await?;

        if let Some(rating) = input.rating {
            ProductionRepo::apply_rating(&mut tx, input.production_id, rating).await?;
        }

        tx.commit().await?;
        Ok(record)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ViewingRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM viewing_records WHERE id = $1");
        sqlx::query_as::<_, ViewingRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a viewing record with its image URLs and linked casting ids.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ViewingRecordDetail>, sqlx::Error> {
        let Some(record) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let image_urls: Vec<String> = sqlx::query_scalar(
            "SELECT url FROM viewing_images WHERE viewing_record_id = $1 ORDER BY sort_order, id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let casting_ids: Vec<DbId> = sqlx::query_scalar(
            "SELECT casting_id FROM viewing_castings \
             WHERE viewing_record_id = $1 \
             ORDER BY casting_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(ViewingRecordDetail {
            record,
            image_urls,
            casting_ids,
        }))
    }

    /// A user's viewings of any of `production_ids`, with the venue reached
    /// through each record's seat.
    pub async fn list_for_series(
        pool: &PgPool,
        user_id: DbId,
        production_ids: &[DbId],
    ) -> Result<Vec<SeriesViewingRow>, sqlx::Error> {
        sqlx::query_as::<_, SeriesViewingRow>(
            "SELECT r.id, r.production_id, r.viewed_on, r.show_time, r.rating, r.note, \
                    sv.name AS seat_venue_name, sv.region AS seat_venue_region \
             FROM viewing_records r \
             LEFT JOIN seats s ON s.id = r.seat_id \
             LEFT JOIN venues sv ON sv.id = s.venue_id \
             WHERE r.user_id = $1 AND r.production_id = ANY($2) \
             ORDER BY r.viewed_on DESC, r.id DESC",
        )
        .bind(user_id)
        .bind(production_ids)
        .fetch_all(pool)
        .await
    }
}

/// Sorted, duplicate-free copy of `ids`.
pub fn dedup_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
