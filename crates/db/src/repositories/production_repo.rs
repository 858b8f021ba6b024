//! Repository for the `productions` table.
//!
//! Season resolution needs three reads: by id, by name substring and a full
//! scan. All three return productions joined with their nominal venue.

use myot_core::types::DbId;
use sqlx::PgPool;

use crate::models::production::{CreateProduction, Production, ProductionWithVenue};

/// Column list for the `productions` table.
const COLUMNS: &str = "id, name, venue_id, start_date, end_date, poster_url, \
    rating_sum, rating_count, created_at, updated_at";

/// Select list for productions joined with `venues v`.
const WITH_VENUE: &str = "SELECT p.id, p.name, p.start_date, p.end_date, p.poster_url, \
    p.rating_sum, p.rating_count, v.name AS venue_name, v.region AS venue_region \
    FROM productions p \
    LEFT JOIN venues v ON v.id = p.venue_id";

pub struct ProductionRepo;

impl ProductionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProduction,
    ) -> Result<Production, sqlx::Error> {
        let query = format!(
            "INSERT INTO productions (name, venue_id, start_date, end_date, poster_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Production>(&query)
            .bind(&input.name)
            .bind(input.venue_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.poster_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM productions WHERE id = $1");
        sqlx::query_as::<_, Production>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_with_venue(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductionWithVenue>, sqlx::Error> {
        let query = format!("{WITH_VENUE} WHERE p.id = $1");
        sqlx::query_as::<_, ProductionWithVenue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Productions whose name contains `fragment`, case-sensitively.
    ///
    /// Uses `strpos` so `%` and `_` in titles are matched literally.
    pub async fn list_name_containing(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<ProductionWithVenue>, sqlx::Error> {
        let query = format!("{WITH_VENUE} WHERE strpos(p.name, $1) > 0 ORDER BY p.id");
        sqlx::query_as::<_, ProductionWithVenue>(&query)
            .bind(fragment)
            .fetch_all(pool)
            .await
    }

    /// Every production in the catalog.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProductionWithVenue>, sqlx::Error> {
        let query = format!("{WITH_VENUE} ORDER BY p.id");
        sqlx::query_as::<_, ProductionWithVenue>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fold one rating into the production's running totals.
    ///
    /// Runs inside the caller's transaction. The increment is a single
    /// `UPDATE ... SET x = x + n`, so concurrent writers commute. Returns
    /// `RowNotFound` if the production does not exist.
    pub async fn apply_rating(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        production_id: DbId,
        rating: i32,
    ) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE productions SET \
                rating_sum = rating_sum + $2, \
                rating_count = rating_count + 1, \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(production_id)
        .bind(i64::from(rating))
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
