//! Plain domain records exchanged between the store and the ticketbook
//! services.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Venue name plus region, as shown next to a season or a viewing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueRef {
    pub name: String,
    pub region: Option<String>,
}

/// One catalog run of a show, joined with its nominal venue.
#[derive(Debug, Clone, Serialize)]
pub struct Production {
    pub id: DbId,
    /// Free text. Re-runs of the same show are only linked through this.
    pub name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub poster_url: Option<String>,
    pub venue: Option<VenueRef>,
    pub rating_sum: i64,
    pub rating_count: i64,
}

/// A user's viewing record loaded for series aggregation.
///
/// `seat_venue` is the venue reached through the record's seat, which may
/// differ from the production's nominal venue when the catalog is stale.
#[derive(Debug, Clone)]
pub struct SeriesViewing {
    pub id: DbId,
    pub production_id: DbId,
    pub viewed_on: Timestamp,
    pub show_time: Option<NaiveTime>,
    pub rating: Option<i32>,
    pub note: Option<String>,
    pub seat_venue: Option<VenueRef>,
}

/// A cast assignment joined with its actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
    pub casting_id: DbId,
    pub role_name: String,
    pub actor_id: DbId,
    pub actor_name: String,
    pub birth_date: Option<NaiveDate>,
    pub performance_count: i32,
}
