//! Running rating aggregates and per-user cast counts.
//!
//! The write side (incrementing `rating_sum`/`rating_count` in the same
//! transaction as the viewing insert) lives in the `db` crate. This module
//! owns the validation that runs before any database work and the read-side
//! math.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

use super::model::Production;
use super::store::TicketbookStore;

/// Lowest accepted viewing rating.
pub const MIN_RATING: i32 = 0;

/// Highest accepted viewing rating.
pub const MAX_RATING: i32 = 5;

/// Online sum and count of the ratings left on a production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingTotals {
    pub rating_sum: i64,
    pub rating_count: i64,
}

impl RatingTotals {
    /// Fold one rating into the totals.
    pub fn record(&mut self, rating: i32) {
        self.rating_sum += i64::from(rating);
        self.rating_count += 1;
    }

    /// `rating_sum / rating_count`, or `None` before the first rating.
    pub fn average(&self) -> Option<f64> {
        (self.rating_count > 0).then(|| self.rating_sum as f64 / self.rating_count as f64)
    }
}

impl From<&Production> for RatingTotals {
    fn from(production: &Production) -> Self {
        Self {
            rating_sum: production.rating_sum,
            rating_count: production.rating_count,
        }
    }
}

/// Rating summary returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct RatingSummary {
    pub production_id: DbId,
    #[serde(flatten)]
    pub totals: RatingTotals,
    pub average_rating: Option<f64>,
}

/// Reject ratings outside `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Current rating summary of a production, `Ok(None)` if it does not exist.
pub async fn average_rating<S: TicketbookStore>(
    store: &S,
    production_id: DbId,
) -> Result<Option<RatingSummary>, S::Error> {
    let summary = store
        .find_production(production_id)
        .await?
        .map(|production| {
            let totals = RatingTotals::from(&production);
            RatingSummary {
                production_id,
                totals,
                average_rating: totals.average(),
            }
        });
    Ok(summary)
}

/// How many of the user's viewings of `production_id` are linked to each
/// cast assignment. Assignments without links are absent.
pub async fn cast_counts<S: TicketbookStore>(
    store: &S,
    user_id: DbId,
    production_id: DbId,
) -> Result<BTreeMap<DbId, i64>, S::Error> {
    let links = store.list_user_cast_links(user_id, production_id).await?;
    Ok(tally_cast_links(links))
}

/// Count occurrences of each casting id.
pub fn tally_cast_links(links: impl IntoIterator<Item = DbId>) -> BTreeMap<DbId, i64> {
    let mut counts = BTreeMap::new();
    for casting_id in links {
        *counts.entry(casting_id).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::ticketbook::memory::{production, InMemoryStore};

    #[test]
    fn no_average_before_first_rating() {
        assert_eq!(RatingTotals::default().average(), None);
    }

    #[test]
    fn totals_track_every_rating() {
        let ratings = [4, 5, 3, 0, 5];
        let mut totals = RatingTotals::default();
        for r in ratings {
            totals.record(r);
        }
        assert_eq!(totals.rating_count, ratings.len() as i64);
        assert_eq!(totals.rating_sum, 17);
        assert_eq!(totals.average(), Some(17.0 / 5.0));
    }

    #[test]
    fn two_ratings_average_to_four_and_a_half() {
        let mut totals = RatingTotals::default();
        totals.record(4);
        totals.record(5);
        assert_eq!(
            totals,
            RatingTotals {
                rating_sum: 9,
                rating_count: 2
            }
        );
        assert_eq!(totals.average(), Some(4.5));
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
        assert_matches!(validate_rating(-1), Err(CoreError::Validation(_)));
        assert_matches!(validate_rating(6), Err(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn summary_reads_production_totals() {
        let mut rated = production(1, "Rent", "2020-01-01", "2020-02-01");
        rated.rating_sum = 9;
        rated.rating_count = 2;
        let unrated = production(2, "Rent", "2021-01-01", "2021-02-01");
        let store = InMemoryStore::default()
            .with_production(rated)
            .with_production(unrated);

        let summary = average_rating(&store, 1).await.unwrap().unwrap();
        assert_eq!(summary.average_rating, Some(4.5));

        let summary = average_rating(&store, 2).await.unwrap().unwrap();
        assert_eq!(summary.average_rating, None);

        assert!(average_rating(&store, 3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cast_counts_per_assignment() {
        let store = InMemoryStore::default()
            .with_cast_link(1, 50, 700)
            .with_cast_link(1, 50, 700)
            .with_cast_link(1, 50, 701)
            .with_cast_link(1, 51, 702)
            .with_cast_link(2, 50, 700);

        let counts = cast_counts(&store, 1, 50).await.unwrap();
        assert_eq!(counts.get(&700), Some(&2));
        assert_eq!(counts.get(&701), Some(&1));
        assert_eq!(counts.get(&702), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn summary_serializes_flat() {
        let summary = RatingSummary {
            production_id: 3,
            totals: RatingTotals {
                rating_sum: 9,
                rating_count: 2,
            },
            average_rating: Some(4.5),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["rating_sum"], 9);
        assert_eq!(json["rating_count"], 2);
        assert_eq!(json["average_rating"], 4.5);
    }
}
