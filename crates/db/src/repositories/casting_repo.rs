//! Repository for the `actors`, `castings` and `viewing_castings` tables.

use myot_core::types::DbId;
use sqlx::PgPool;

use crate::models::casting::{Actor, Casting, CastingWithActor, CreateActor, CreateCasting};

/// Column list for the `castings` table.
const COLUMNS: &str = "id, production_id, actor_id, role_name, performance_count, created_at";

/// Column list for the `actors` table.
const ACTOR_COLUMNS: &str = "id, name, birth_date, created_at";

pub struct CastingRepo;

impl CastingRepo {
    pub async fn create_actor(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query =
            format!("INSERT INTO actors (name, birth_date) VALUES ($1, $2) RETURNING {ACTOR_COLUMNS}");
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(input.birth_date)
            .fetch_one(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateCasting) -> Result<Casting, sqlx::Error> {
        let query = format!(
            "INSERT INTO castings (production_id, actor_id, role_name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Casting>(&query)
            .bind(input.production_id)
            .bind(input.actor_id)
            .bind(&input.role_name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Casting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM castings WHERE id = $1");
        sqlx::query_as::<_, Casting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All cast assignments of a production with their actors.
    pub async fn list_with_actors(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<CastingWithActor>, sqlx::Error> {
        sqlx::query_as::<_, CastingWithActor>(
            "SELECT c.id, c.role_name, c.performance_count, \
                    a.id AS actor_id, a.name AS actor_name, a.birth_date \
             FROM castings c \
             JOIN actors a ON a.id = c.actor_id \
             WHERE c.production_id = $1 \
             ORDER BY c.id",
        )
        .bind(production_id)
        .fetch_all(pool)
        .await
    }

    /// How many of `casting_ids` belong to `production_id`.
    pub async fn count_in_production(
        pool: &PgPool,
        production_id: DbId,
        casting_ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM castings WHERE production_id = $1 AND id = ANY($2)",
        )
        .bind(production_id)
        .bind(casting_ids)
        .fetch_one(pool)
        .await
    }

    /// One casting id per link on the user's viewings of `production_id`.
    pub async fn list_user_links(
        pool: &PgPool,
        user_id: DbId,
        production_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT vc.casting_id \
             FROM viewing_castings vc \
             JOIN viewing_records v ON v.id = vc.viewing_record_id \
             WHERE v.user_id = $1 AND v.production_id = $2",
        )
        .bind(user_id)
        .bind(production_id)
        .fetch_all(pool)
        .await
    }

    /// Link a viewing record to cast assignments and bump their
    /// `performance_count`, inside the caller's transaction.
    pub async fn link_viewing(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        viewing_record_id: DbId,
        casting_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        if casting_ids.is_empty() {
            return Ok(());
        }

        for &casting_id in casting_ids {
            sqlx::query(
                "INSERT INTO viewing_castings (viewing_record_id, casting_id) VALUES ($1, $2)",
            )
            .bind(viewing_record_id)
            .bind(casting_id)
            .execute(&mut **tx)
            .await?;
        }

        sqlx::query(
            "UPDATE castings SET performance_count = performance_count + 1 WHERE id = ANY($1)",
        )
        .bind(casting_ids)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
