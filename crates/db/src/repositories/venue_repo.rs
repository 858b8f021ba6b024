//! Repository for the `venues` and `seats` tables.

use myot_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{CreateSeat, CreateVenue, Seat, Venue};

/// Column list for the `venues` table.
const COLUMNS: &str = "id, name, region, created_at, updated_at";

/// Column list for the `seats` table.
const SEAT_COLUMNS: &str = "id, venue_id, section, seat_row, seat_number, created_at";

pub struct VenueRepo;

impl VenueRepo {
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!("INSERT INTO venues (name, region) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.region)
            .fetch_one(pool)
            .await
    }

    pub async fn create_seat(pool: &PgPool, input: &CreateSeat) -> Result<Seat, sqlx::Error> {
        let query = format!(
            "INSERT INTO seats (venue_id, section, seat_row, seat_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SEAT_COLUMNS}"
        );
        sqlx::query_as::<_, Seat>(&query)
            .bind(input.venue_id)
            .bind(&input.section)
            .bind(&input.seat_row)
            .bind(&input.seat_number)
            .fetch_one(pool)
            .await
    }

    pub async fn find_seat(pool: &PgPool, id: DbId) -> Result<Option<Seat>, sqlx::Error> {
        let query = format!("SELECT {SEAT_COLUMNS} FROM seats WHERE id = $1");
        sqlx::query_as::<_, Seat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
