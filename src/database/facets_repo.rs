use sqlx::SqlitePool;

const SQL_DISTINCT_CITIES: &str = r#"
SELECT DISTINCT city
FROM advocates
ORDER BY city ASC
"#;

const SQL_DISTINCT_DEGREES: &str = r#"
SELECT DISTINCT degree
FROM advocates
ORDER BY degree ASC
"#;

const SQL_ALL_SPECIALTIES: &str = "SELECT specialties FROM advocates";

pub async fn list_distinct_cities(pool: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_DISTINCT_CITIES)
        .fetch_all(pool)
        .await
}

pub async fn list_distinct_degrees(pool: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_DISTINCT_DEGREES)
        .fetch_all(pool)
        .await
}

/// Raw JSON specialty arrays, one per advocate.
pub async fn list_specialty_arrays(pool: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_ALL_SPECIALTIES)
        .fetch_all(pool)
        .await
}
