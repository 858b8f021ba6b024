//! In-memory [`TicketbookStore`] for service tests.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{DbId, Timestamp};

use super::model::{Production, SeriesViewing, VenueRef};
use super::store::TicketbookStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    productions: Vec<Production>,
    viewings: Vec<(DbId, SeriesViewing)>,
    cast_links: Vec<(DbId, DbId, DbId)>,
    substring_search_fails: bool,
    full_scans: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_production(mut self, production: Production) -> Self {
        self.productions.push(production);
        self
    }

    pub fn with_viewing(mut self, user_id: DbId, viewing: SeriesViewing) -> Self {
        self.viewings.push((user_id, viewing));
        self
    }

    /// Link one of the user's viewings of `production_id` to `casting_id`.
    pub fn with_cast_link(mut self, user_id: DbId, production_id: DbId, casting_id: DbId) -> Self {
        self.cast_links.push((user_id, production_id, casting_id));
        self
    }

    /// A copy whose substring search always comes back empty.
    pub fn with_failing_substring_search(&self) -> Self {
        Self {
            productions: self.productions.clone(),
            viewings: self.viewings.clone(),
            cast_links: self.cast_links.clone(),
            substring_search_fails: true,
            full_scans: AtomicUsize::new(0),
        }
    }

    pub fn full_scans(&self) -> usize {
        self.full_scans.load(Ordering::SeqCst)
    }
}

impl TicketbookStore for InMemoryStore {
    type Error = Infallible;

    async fn find_production(&self, id: DbId) -> Result<Option<Production>, Infallible> {
        Ok(self.productions.iter().find(|p| p.id == id).cloned())
    }

    async fn find_productions_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Production>, Infallible> {
        if self.substring_search_fails {
            return Ok(Vec::new());
        }
        Ok(self
            .productions
            .iter()
            .filter(|p| p.name.as_deref().is_some_and(|n| n.contains(fragment)))
            .cloned()
            .collect())
    }

    async fn list_all_productions(&self) -> Result<Vec<Production>, Infallible> {
        self.full_scans.fetch_add(1, Ordering::SeqCst);
        Ok(self.productions.clone())
    }

    async fn list_series_viewings(
        &self,
        user_id: DbId,
        production_ids: &[DbId],
    ) -> Result<Vec<SeriesViewing>, Infallible> {
        Ok(self
            .viewings
            .iter()
            .filter(|(owner, v)| *owner == user_id && production_ids.contains(&v.production_id))
            .map(|(_, v)| v.clone())
            .collect())
    }

    async fn list_user_cast_links(
        &self,
        user_id: DbId,
        production_id: DbId,
    ) -> Result<Vec<DbId>, Infallible> {
        Ok(self
            .cast_links
            .iter()
            .filter(|(owner, p, _)| *owner == user_id && *p == production_id)
            .map(|(_, _, casting)| *casting)
            .collect())
    }
}

/// Midnight UTC on `date` (`YYYY-MM-DD`).
pub fn day(date: &str) -> Timestamp {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
}

/// UTC instant from `YYYY-MM-DD HH:MM`.
pub fn at(datetime: &str) -> Timestamp {
    NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M")
        .unwrap()
        .and_utc()
}

pub fn production(id: DbId, name: &str, start: &str, end: &str) -> Production {
    Production {
        id,
        name: Some(name.to_string()),
        start_date: Some(day(start)),
        end_date: Some(day(end)),
        poster_url: None,
        venue: None,
        rating_sum: 0,
        rating_count: 0,
    }
}

pub fn venue(name: &str, region: &str) -> VenueRef {
    VenueRef {
        name: name.to_string(),
        region: Some(region.to_string()),
    }
}

pub fn viewing(id: DbId, production_id: DbId, viewed_on: Timestamp) -> SeriesViewing {
    SeriesViewing {
        id,
        production_id,
        viewed_on,
        show_time: None,
        rating: None,
        note: None,
        seat_venue: None,
    }
}
