use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::database::advocates_repo;
use crate::services::advocates_service::Advocate;
use crate::services::seed_data;

pub const DEFAULT_LARGE_SEED_COUNT: i64 = 5000;
pub const MAX_LARGE_SEED_COUNT: i64 = 100_000;
const INSERT_BATCH_SIZE: usize = 500;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Count must be between 1 and 100,000")]
    InvalidCount(i64),

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

pub fn validate_seed_count(count: i64) -> Result<usize, SeedError> {
    if (1..=MAX_LARGE_SEED_COUNT).contains(&count) {
        Ok(count as usize)
    } else {
        Err(SeedError::InvalidCount(count))
    }
}

pub async fn clear_advocates(pool: &SqlitePool) -> sqlx::Result<u64> {
    info!("Clearing advocates table...");
    let deleted = advocates_repo::delete_all(pool).await?;
    info!(deleted, "Advocates table cleared, id sequence reset");
    Ok(deleted)
}

pub async fn seed_fixed(pool: &SqlitePool) -> sqlx::Result<Vec<Advocate>> {
    let rows = advocates_repo::insert_batch(pool, &seed_data::fixed_advocates()).await?;
    Ok(rows.into_iter().map(Advocate::from).collect())
}

/// Generates `count` advocates and inserts them in batches. Earlier batches
/// stay committed if a later one fails.
pub async fn seed_generated(pool: &SqlitePool, count: i64) -> Result<usize, SeedError> {
    let count = validate_seed_count(count)?;

    info!(count, "Generating advocate records...");
    let generated = {
        let mut rng = rand::thread_rng();
        seed_data::generate_advocates(&mut rng, count)
    };

    let mut inserted = 0;
    for batch in generated.chunks(INSERT_BATCH_SIZE) {
        inserted += advocates_repo::insert_many(pool, batch).await? as usize;
        info!(inserted, count, "Inserted advocate batch");
    }

    Ok(inserted)
}
