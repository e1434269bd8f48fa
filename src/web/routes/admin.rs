use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::services::seed_service::{self, SeedError, DEFAULT_LARGE_SEED_COUNT};

type AdminResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn failed(message: &str, err: &dyn std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message, "details": err.to_string() })),
    )
}

/// `POST /api/clear-db`
pub async fn clear_db_handler(State(pool): State<SqlitePool>) -> AdminResult {
    match seed_service::clear_advocates(&pool).await {
        Ok(_) => Ok(Json(json!({
            "success": true,
            "message": "All advocate records have been deleted and ID sequence reset",
        }))),
        Err(e) => {
            warn!(error = %e, "Error clearing database");
            Err(failed("Failed to clear database", &e))
        }
    }
}

/// `POST /api/seed`
pub async fn seed_handler(State(pool): State<SqlitePool>) -> AdminResult {
    match seed_service::seed_fixed(&pool).await {
        Ok(advocates) => Ok(Json(json!({
            "success": true,
            "message": format!("Successfully seeded {} advocate records", advocates.len()),
            "advocates": advocates,
        }))),
        Err(e) => {
            warn!(error = %e, "Error seeding database");
            Err(failed("Failed to seed database", &e))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SeedLargeBody {
    count: Option<i64>,
}

/// `POST /api/seed-large` with optional `{"count": n}`; a missing or
/// unreadable body seeds the default count.
pub async fn seed_large_handler(State(pool): State<SqlitePool>, body: Bytes) -> AdminResult {
    let count = serde_json::from_slice::<SeedLargeBody>(&body)
        .unwrap_or_default()
        .count
        .unwrap_or(DEFAULT_LARGE_SEED_COUNT);

    info!(count, "Starting large dataset seed");
    match seed_service::seed_generated(&pool, count).await {
        Ok(inserted) => Ok(Json(json!({
            "success": true,
            "message": format!("Successfully seeded {} advocate records", count),
            "count": inserted,
        }))),
        Err(e @ SeedError::InvalidCount(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )),
        Err(SeedError::Store(e)) => {
            warn!(error = %e, "Error seeding large dataset");
            Err(failed("Failed to seed large dataset", &e))
        }
    }
}
