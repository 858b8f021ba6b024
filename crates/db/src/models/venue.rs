//! Venue and seat models.

use myot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub region: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub region: Option<String>,
}

/// A row from the `seats` table. A seat always belongs to one venue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Seat {
    pub id: DbId,
    pub venue_id: DbId,
    pub section: Option<String>,
    pub seat_row: Option<String>,
    pub seat_number: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a seat.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeat {
    pub venue_id: DbId,
    pub section: Option<String>,
    pub seat_row: Option<String>,
    pub seat_number: Option<String>,
}
