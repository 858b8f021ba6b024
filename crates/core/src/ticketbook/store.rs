//! Data-access seam for the ticketbook services.
//!
//! Services receive the store as an explicit argument so tests can swap in
//! an in-memory implementation. The PostgreSQL implementation lives in the
//! `db` crate.

use std::future::Future;

use crate::types::DbId;

use super::model::{Production, SeriesViewing};

/// Read operations the ticketbook services need from the catalog and the
/// users' viewing records.
pub trait TicketbookStore: Send + Sync {
    /// Error returned by the backing store. Propagated to callers unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch a production by id.
    fn find_production(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Production>, Self::Error>> + Send;

    /// Productions whose raw name contains `fragment` (case-sensitive).
    ///
    /// This is the cheap, index-friendly pre-filter of season resolution.
    fn find_productions_containing(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Production>, Self::Error>> + Send;

    /// Every production in the catalog, unbounded.
    fn list_all_productions(
        &self,
    ) -> impl Future<Output = Result<Vec<Production>, Self::Error>> + Send;

    /// The user's viewing records for any of `production_ids`, each with the
    /// venue reached through its seat.
    fn list_series_viewings(
        &self,
        user_id: DbId,
        production_ids: &[DbId],
    ) -> impl Future<Output = Result<Vec<SeriesViewing>, Self::Error>> + Send;

    /// One casting id per cast link on the user's viewing records for
    /// `production_id`. A casting appears once per linked record.
    fn list_user_cast_links(
        &self,
        user_id: DbId,
        production_id: DbId,
    ) -> impl Future<Output = Result<Vec<DbId>, Self::Error>> + Send;
}
