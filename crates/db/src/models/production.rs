//! Production entity model and DTOs.
//!
//! A production is one run of a show. Re-runs are separate rows whose only
//! link is their name; see `myot_core::ticketbook::normalize`.

use myot_core::ticketbook::model::{Production as CatalogProduction, VenueRef};
use myot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `productions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Production {
    pub id: DbId,
    pub name: Option<String>,
    pub venue_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub poster_url: Option<String>,
    pub rating_sum: i64,
    pub rating_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A production joined with its nominal venue.
#[derive(Debug, Clone, FromRow)]
pub struct ProductionWithVenue {
    pub id: DbId,
    pub name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub poster_url: Option<String>,
    pub rating_sum: i64,
    pub rating_count: i64,
    pub venue_name: Option<String>,
    pub venue_region: Option<String>,
}

impl From<ProductionWithVenue> for CatalogProduction {
    fn from(row: ProductionWithVenue) -> Self {
        let venue = row.venue_name.map(|name| VenueRef {
            name,
            region: row.venue_region,
        });
        Self {
            id: row.id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            poster_url: row.poster_url,
            venue,
            rating_sum: row.rating_sum,
            rating_count: row.rating_count,
        }
    }
}

/// DTO for creating a production. Rating totals always start at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduction {
    pub name: Option<String>,
    pub venue_id: Option<DbId>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub poster_url: Option<String>,
}
