//! Domain logic for the MyOT ticketbook.
//!
//! Everything in this crate is free of database and HTTP concerns. Storage
//! is reached only through the [`ticketbook::store::TicketbookStore`] trait,
//! which the `db` crate implements for PostgreSQL.

pub mod error;
pub mod ticketbook;
pub mod types;
