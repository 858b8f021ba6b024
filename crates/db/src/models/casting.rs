//! Actor and cast assignment models.

use chrono::NaiveDate;
use myot_core::ticketbook::model::CastMember;
use myot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for creating an actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// A row from the `castings` table: one actor in one role of a production.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Casting {
    pub id: DbId,
    pub production_id: DbId,
    pub actor_id: DbId,
    pub role_name: String,
    pub performance_count: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a cast assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCasting {
    pub production_id: DbId,
    pub actor_id: DbId,
    pub role_name: String,
}

/// A casting joined with its actor.
#[derive(Debug, Clone, FromRow)]
pub struct CastingWithActor {
    pub id: DbId,
    pub role_name: String,
    pub performance_count: i32,
    pub actor_id: DbId,
    pub actor_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl From<CastingWithActor> for CastMember {
    fn from(row: CastingWithActor) -> Self {
        Self {
            casting_id: row.id,
            role_name: row.role_name,
            actor_id: row.actor_id,
            actor_name: row.actor_name,
            birth_date: row.birth_date,
            performance_count: row.performance_count,
        }
    }
}
