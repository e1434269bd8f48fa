use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use crate::models::{AdvocateRow, NewAdvocate};
use crate::services::advocate_query::{SqlFragment, SqlParam};

const SQL_SELECT_ADVOCATES: &str = r#"
SELECT
  id,
  first_name,
  last_name,
  city,
  degree,
  specialties,
  years_of_experience,
  phone_number,
  created_at
FROM advocates
"#;

const SQL_COUNT_ADVOCATES: &str = "SELECT count(*) FROM advocates";

const SQL_INSERT_ADVOCATE_ROW: &str = r#"
INSERT INTO advocates (
  first_name,
  last_name,
  city,
  degree,
  specialties,
  years_of_experience,
  phone_number
) VALUES (?, ?, ?, ?, ?, ?, ?)
"#;

const SQL_INSERT_ADVOCATE: &str = r#"
INSERT INTO advocates (
  first_name,
  last_name,
  city,
  degree,
  specialties,
  years_of_experience,
  phone_number
) VALUES (?, ?, ?, ?, ?, ?, ?)
RETURNING
  id,
  first_name,
  last_name,
  city,
  degree,
  specialties,
  years_of_experience,
  phone_number,
  created_at
"#;

const SQL_DELETE_ALL: &str = "DELETE FROM advocates";

const SQL_RESET_SEQUENCE: &str = "DELETE FROM sqlite_sequence WHERE name = 'advocates'";

fn bind_params<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    params: &'q [SqlParam],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Integer(value) => query.bind(*value),
        };
    }
    query
}

pub async fn count_matching(pool: &SqlitePool, predicate: &SqlFragment) -> sqlx::Result<i64> {
    let sql = format!("{} {}", SQL_COUNT_ADVOCATES, predicate.where_clause());
    let (count,) = bind_params(sqlx::query_as::<_, (i64,)>(&sql), &predicate.params)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn list_page(
    pool: &SqlitePool,
    predicate: &SqlFragment,
    order_by: &str,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<AdvocateRow>> {
    let sql = format!(
        "{} {} {} LIMIT ? OFFSET ?",
        SQL_SELECT_ADVOCATES,
        predicate.where_clause(),
        order_by
    );
    bind_params(sqlx::query_as::<_, AdvocateRow>(&sql), &predicate.params)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

fn specialties_json(advocate: &NewAdvocate) -> sqlx::Result<String> {
    serde_json::to_string(&advocate.specialties).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

pub async fn insert_advocate(
    conn: &mut SqliteConnection,
    advocate: &NewAdvocate,
) -> sqlx::Result<AdvocateRow> {
    let specialties = specialties_json(advocate)?;

    sqlx::query_as::<_, AdvocateRow>(SQL_INSERT_ADVOCATE)
        .bind(&advocate.first_name)
        .bind(&advocate.last_name)
        .bind(&advocate.city)
        .bind(&advocate.degree)
        .bind(specialties)
        .bind(advocate.years_of_experience)
        .bind(&advocate.phone_number)
        .fetch_one(conn)
        .await
}

/// Inserts a batch atomically; either every row lands or none do.
pub async fn insert_batch(
    pool: &SqlitePool,
    advocates: &[NewAdvocate],
) -> sqlx::Result<Vec<AdvocateRow>> {
    let mut tx = pool.begin().await?;
    let mut rows = Vec::with_capacity(advocates.len());
    for advocate in advocates {
        rows.push(insert_advocate(&mut *tx, advocate).await?);
    }
    tx.commit().await?;
    Ok(rows)
}

/// Bulk variant of [`insert_batch`] that reads nothing back. Returns the
/// number of rows written.
pub async fn insert_many(pool: &SqlitePool, advocates: &[NewAdvocate]) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut written = 0;
    for advocate in advocates {
        let specialties = specialties_json(advocate)?;
        written += sqlx::query(SQL_INSERT_ADVOCATE_ROW)
            .bind(&advocate.first_name)
            .bind(&advocate.last_name)
            .bind(&advocate.city)
            .bind(&advocate.degree)
            .bind(specialties)
            .bind(advocate.years_of_experience)
            .bind(&advocate.phone_number)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    tx.commit().await?;
    Ok(written)
}

/// Deletes every advocate and restarts id assignment at 1.
pub async fn delete_all(pool: &SqlitePool) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let res = sqlx::query(SQL_DELETE_ALL).execute(&mut *tx).await?;
    sqlx::query(SQL_RESET_SEQUENCE).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(res.rows_affected())
}
