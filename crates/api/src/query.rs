//! Shared query parameter types for API handlers.

use myot_core::ticketbook::roles::BirthOrder;
use serde::Deserialize;

/// `?order=asc|desc` for the role listing. Defaults to ascending.
#[derive(Debug, Deserialize)]
pub struct RoleOrderParams {
    #[serde(default)]
    pub order: BirthOrder,
}
