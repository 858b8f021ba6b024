//! Ticketbook aggregation engine.
//!
//! Three cooperating pieces sit on top of an injected [`store::TicketbookStore`]:
//!
//! - [`resolver`] finds every catalog run ("season") of the same production
//!   by comparing [`normalize`]d titles.
//! - [`aggregator`] binds a user's viewing records to the season whose date
//!   window contains them and shapes the personal series view.
//! - [`accumulator`] covers the running rating aggregate and per-user cast
//!   counts. [`roles`] is the related role-grouping transform.
//!
//! Season groups are derived on every call and never cached.

pub mod accumulator;
pub mod aggregator;
pub mod model;
pub mod normalize;
pub mod resolver;
pub mod roles;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;
