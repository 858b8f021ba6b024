//! Role-grouped cast listing for a production.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::CastMember;

/// Direction in which actors are ordered by birth date within a role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum BirthOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// All actors cast in one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGroup {
    pub role_name: String,
    pub actors: Vec<CastMember>,
}

/// Group cast assignments by role name.
///
/// Roles are sorted by name. Within a role, actors are ordered by birth date
/// in `order`; actors without a birth date come last, sorted by name.
pub fn group_roles(castings: Vec<CastMember>, order: BirthOrder) -> Vec<RoleGroup> {
    let mut by_role: BTreeMap<String, Vec<CastMember>> = BTreeMap::new();
    for member in castings {
        by_role.entry(member.role_name.clone()).or_default().push(member);
    }

    by_role
        .into_iter()
        .map(|(role_name, mut actors)| {
            actors.sort_by(|a, b| compare_actors(a, b, order));
            RoleGroup { role_name, actors }
        })
        .collect()
}

fn compare_actors(a: &CastMember, b: &CastMember, order: BirthOrder) -> Ordering {
    let by_birth = match (a.birth_date, b.birth_date) {
        (Some(x), Some(y)) => match order {
            BirthOrder::Ascending => x.cmp(&y),
            BirthOrder::Descending => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_birth
        .then_with(|| a.actor_name.cmp(&b.actor_name))
        .then_with(|| a.casting_id.cmp(&b.casting_id))
}
