//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or an open transaction) as the first argument.

pub mod casting_repo;
pub mod production_repo;
pub mod venue_repo;
pub mod viewing_record_repo;

pub use casting_repo::CastingRepo;
pub use production_repo::ProductionRepo;
pub use venue_repo::VenueRepo;
pub use viewing_record_repo::ViewingRecordRepo;
