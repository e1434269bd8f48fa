use sqlx::SqlitePool;

const SQL_CREATE_ADVOCATES: &str = r#"
CREATE TABLE IF NOT EXISTS advocates (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  first_name TEXT NOT NULL,
  last_name TEXT NOT NULL,
  city TEXT NOT NULL,
  degree TEXT NOT NULL,
  specialties TEXT NOT NULL DEFAULT '[]',
  years_of_experience INTEGER NOT NULL,
  phone_number TEXT NOT NULL,
  created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const SQL_CREATE_LAST_NAME_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_advocates_last_name ON advocates (last_name)
"#;

/// Creates the advocates table when it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ADVOCATES).execute(pool).await?;
    sqlx::query(SQL_CREATE_LAST_NAME_INDEX).execute(pool).await?;
    Ok(())
}
