//! Season resolution: find every catalog run of the same production.

use std::cmp::Ordering;

use serde::Serialize;

use crate::types::DbId;

use super::model::Production;
use super::normalize::{normalize_title, search_fragment};
use super::store::TicketbookStore;

/// All seasons of one production, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonGroup {
    /// The reference production's trimmed name.
    pub canonical_name: String,
    pub seasons: Vec<Production>,
}

impl SeasonGroup {
    pub fn season_ids(&self) -> Vec<DbId> {
        self.seasons.iter().map(|s| s.id).collect()
    }
}

/// Resolve the season group of `production_id`.
///
/// Returns `Ok(None)` when the production does not exist or has no usable
/// name. The substring pre-filter runs first; the full catalog scan in
/// [`scan_catalog_for_key`] only runs when the pre-filter yields nothing.
pub async fn resolve_seasons<S: TicketbookStore>(
    store: &S,
    production_id: DbId,
) -> Result<Option<SeasonGroup>, S::Error> {
    let Some(reference) = store.find_production(production_id).await? else {
        return Ok(None);
    };
    let Some(name) = reference
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
    else {
        return Ok(None);
    };

    let key = normalize_title(&name);

    let candidates = store
        .find_productions_containing(search_fragment(&name))
        .await?;
    let mut seasons = retain_matching_key(candidates, &key);

    if seasons.is_empty() {
        seasons = scan_catalog_for_key(store, &key).await?;
    }

    if !seasons.iter().any(|s| s.id == reference.id) {
        seasons.push(reference);
    }

    sort_newest_first(&mut seasons);

    Ok(Some(SeasonGroup {
        canonical_name: name,
        seasons,
    }))
}

/// Degraded path: scan the whole catalog for productions with `key`.
///
/// The scan is unbounded in catalog size.
pub async fn scan_catalog_for_key<S: TicketbookStore>(
    store: &S,
    key: &str,
) -> Result<Vec<Production>, S::Error> {
    let all = store.list_all_productions().await?;
    Ok(retain_matching_key(all, key))
}

/// Keep the productions whose normalized name equals `key`.
pub fn retain_matching_key(candidates: Vec<Production>, key: &str) -> Vec<Production> {
    candidates
        .into_iter()
        .filter(|p| p.name.as_deref().map(normalize_title).as_deref() == Some(key))
        .collect()
}

/// Sort by start date descending, then id descending.
///
/// Productions without a start date sort after every dated one.
pub fn sort_newest_first(seasons: &mut [Production]) {
    seasons.sort_by(|a, b| {
        let by_start = match (a.start_date, b.start_date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_start.then_with(|| b.id.cmp(&a.id))
    });
}
