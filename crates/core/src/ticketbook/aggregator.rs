//! Per-user series view: a user's viewings bound to the seasons they were
//! attended in.

use chrono::{Datelike, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::types::{DbId, Timestamp};

use super::model::{Production, SeriesViewing, VenueRef};
use super::resolver::resolve_seasons;
use super::store::TicketbookStore;

/// Label used when a season lacks a start or an end date.
pub const UNDETERMINED_PERIOD_LABEL: &str = "period undetermined";

/// Milliseconds from midnight to 23:59:59.999.
const END_OF_DAY_MILLIS: i64 = 86_399_999;

/// A user's series view for one production.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub title: String,
    pub series: Vec<SeasonBlock>,
}

/// One attended season with the user's entries, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonBlock {
    pub label: String,
    pub period: SeasonPeriod,
    pub poster_url: Option<String>,
    pub venue: Option<VenueRef>,
    pub production_id: DbId,
    pub viewing_count: usize,
    pub entries: Vec<SeriesEntry>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonPeriod {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesEntry {
    pub viewing_id: DbId,
    pub viewed_on: Timestamp,
    pub show_time: Option<NaiveTime>,
    pub venue: Option<VenueRef>,
    pub rating: Option<i32>,
    pub note: Option<String>,
}

/// Inclusive date window of a season, widened to whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub from: Option<Timestamp>,
    pub until: Option<Timestamp>,
}

impl SeasonWindow {
    /// Window from a season's start and end dates.
    ///
    /// The start is moved to 00:00:00.000 and the end to 23:59:59.999 of
    /// their UTC days. A missing date leaves that side unbounded.
    pub fn for_season(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self {
            from: start.map(start_of_day),
            until: end.map(end_of_day),
        }
    }

    pub fn contains(&self, instant: Timestamp) -> bool {
        self.from.map_or(true, |from| instant >= from)
            && self.until.map_or(true, |until| instant <= until)
    }
}

/// Build the user's series view for `production_id`.
///
/// Returns `Ok(None)` when the production cannot be resolved to a season
/// group. A resolved group with no attended season yields an empty series.
pub async fn get_series<S: TicketbookStore>(
    store: &S,
    user_id: DbId,
    production_id: DbId,
) -> Result<Option<SeriesView>, S::Error> {
    let Some(group) = resolve_seasons(store, production_id).await? else {
        return Ok(None);
    };

    let viewings = store
        .list_series_viewings(user_id, &group.season_ids())
        .await?;

    Ok(Some(assemble_series(
        group.canonical_name,
        &group.seasons,
        viewings,
    )))
}

/// Bind `viewings` to `seasons` (already sorted newest first) and drop the
/// seasons the user never attended.
pub fn assemble_series(
    title: String,
    seasons: &[Production],
    viewings: Vec<SeriesViewing>,
) -> SeriesView {
    let fallback_poster = seasons.iter().find_map(|s| non_blank(s.poster_url.as_deref()));

    let series = seasons
        .iter()
        .filter_map(|season| {
            let window = SeasonWindow::for_season(season.start_date, season.end_date);

            let mut matched: Vec<&SeriesViewing> = viewings
                .iter()
                .filter(|v| window.contains(v.viewed_on))
                .collect();
            if matched.is_empty() {
                return None;
            }
            matched.sort_by(|a, b| b.viewed_on.cmp(&a.viewed_on));

            let entries: Vec<SeriesEntry> = matched
                .into_iter()
                .map(|v| SeriesEntry {
                    viewing_id: v.id,
                    viewed_on: v.viewed_on,
                    show_time: v.show_time,
                    venue: v.seat_venue.clone().or_else(|| season.venue.clone()),
                    rating: v.rating,
                    note: v.note.clone(),
                })
                .collect();

            let poster_url = non_blank(season.poster_url.as_deref())
                .or(fallback_poster)
                .map(str::to_owned);

            Some(SeasonBlock {
                label: season_label(season.start_date, season.end_date),
                period: SeasonPeriod {
                    start_date: season.start_date,
                    end_date: season.end_date,
                },
                poster_url,
                venue: season.venue.clone(),
                production_id: season.id,
                viewing_count: entries.len(),
                entries,
            })
        })
        .collect();

    SeriesView { title, series }
}

/// `"2016"` for a single-year run, `"2016-2017"` across years, or
/// [`UNDETERMINED_PERIOD_LABEL`] when either date is missing.
pub fn season_label(start: Option<Timestamp>, end: Option<Timestamp>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if start.year() == end.year() => format!("{:04}", start.year()),
        (Some(start), Some(end)) => format!("{:04}-{:04}", start.year(), end.year()),
        _ => UNDETERMINED_PERIOD_LABEL.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn start_of_day(instant: Timestamp) -> Timestamp {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(instant: Timestamp) -> Timestamp {
    start_of_day(instant) + TimeDelta::milliseconds(END_OF_DAY_MILLIS)
}
