use sqlx::PgPool;

/// Connect, migrate, verify the schema is in place.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    myot_db::health_check(&pool).await.unwrap();

    let tables = [
        "venues",
        "seats",
        "productions",
        "actors",
        "castings",
        "viewing_records",
        "viewing_images",
        "viewing_castings",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Rating totals may never go negative.
#[sqlx::test(migrations = "./migrations")]
async fn test_rating_totals_are_checked(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO productions (name, rating_sum, rating_count) VALUES ('Rent', -1, 0)",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
