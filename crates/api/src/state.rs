use myot_db::store::PgTicketbookStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: myot_db::DbPool,
}

impl AppState {
    /// Ticketbook store over this state's pool.
    pub fn ticketbook(&self) -> PgTicketbookStore {
        PgTicketbookStore::new(self.pool.clone())
    }
}
