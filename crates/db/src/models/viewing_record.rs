//! Viewing record ("ticketbook entry") models and DTOs.

use chrono::NaiveTime;
use myot_core::ticketbook::model::{SeriesViewing, VenueRef};
use myot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `viewing_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ViewingRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub production_id: DbId,
    pub seat_id: Option<DbId>,
    pub viewed_on: Timestamp,
    pub show_time: Option<NaiveTime>,
    pub note: Option<String>,
    pub rating: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A viewing record with its images and the cast members the user saw.
#[derive(Debug, Clone, Serialize)]
pub struct ViewingRecordDetail {
    #[serde(flatten)]
    pub record: ViewingRecord,
    pub image_urls: Vec<String>,
    pub casting_ids: Vec<DbId>,
}

/// DTO for recording a viewing. The owning user comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateViewingRecord {
    pub production_id: DbId,
    pub seat_id: Option<DbId>,
    pub viewed_on: Timestamp,
    pub show_time: Option<NaiveTime>,
    pub note: Option<String>,
    pub rating: Option<i32>,
    /// Stored in the given order.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Cast assignments seen; duplicates are ignored.
    #[serde(default)]
    pub casting_ids: Vec<DbId>,
}

/// A viewing joined with the venue reached through its seat.
#[derive(Debug, Clone, FromRow)]
pub struct SeriesViewingRow {
    pub id: DbId,
    pub production_id: DbId,
    pub viewed_on: Timestamp,
    pub show_time: Option<NaiveTime>,
    pub rating: Option<i32>,
    pub note: Option<String>,
    pub seat_venue_name: Option<String>,
    pub seat_venue_region: Option<String>,
}

impl From<SeriesViewingRow> for SeriesViewing {
    fn from(row: SeriesViewingRow) -> Self {
        let seat_venue = row.seat_venue_name.map(|name| VenueRef {
            name,
            region: row.seat_venue_region,
        });
        Self {
            id: row.id,
            production_id: row.production_id,
            viewed_on: row.viewed_on,
            show_time: row.show_time,
            rating: row.rating,
            note: row.note,
            seat_venue,
        }
    }
}
