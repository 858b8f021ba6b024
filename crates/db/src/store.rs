//! PostgreSQL implementation of [`TicketbookStore`].

use myot_core::ticketbook::model::{Production, SeriesViewing};
use myot_core::ticketbook::store::TicketbookStore;
use myot_core::types::DbId;

use crate::repositories::{CastingRepo, ProductionRepo, ViewingRecordRepo};
use crate::DbPool;

/// Ticketbook store backed by a connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgTicketbookStore {
    pool: DbPool,
}

impl PgTicketbookStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TicketbookStore for PgTicketbookStore {
    type Error = sqlx::Error;

    async fn find_production(&self, id: DbId) -> Result<Option<Production>, sqlx::Error> {
        let row = ProductionRepo::find_with_venue(&self.pool, id).await?;
        Ok(row.map(Production::from))
    }

    async fn find_productions_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Production>, sqlx::Error> {
        let rows = ProductionRepo::list_name_containing(&self.pool, fragment).await?;
        Ok(rows.into_iter().map(Production::from).collect())
    }

    async fn list_all_productions(&self) -> Result<Vec<Production>, sqlx::Error> {
        let rows = ProductionRepo::list_all(&self.pool).await?;
        tracing::debug!(rows = rows.len(), "Full catalog scan for season resolution");
        Ok(rows.into_iter().map(Production::from).collect())
    }

    async fn list_series_viewings(
        &self,
        user_id: DbId,
        production_ids: &[DbId],
    ) -> Result<Vec<SeriesViewing>, sqlx::Error> {
        let rows = ViewingRecordRepo::list_for_series(&self.pool, user_id, production_ids).await?;
        Ok(rows.into_iter().map(SeriesViewing::from).collect())
    }

    async fn list_user_cast_links(
        &self,
        user_id: DbId,
        production_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        CastingRepo::list_user_links(&self.pool, user_id, production_id).await
    }
}
