use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::advocate_query::{ListParams, QueryPlan};
use crate::services::advocates_service::{self, AdvocatePage};
use crate::services::facets_service::{self, CitiesFacet, DegreesFacet, SpecialtiesFacet};

type ApiError = (StatusCode, Json<Value>);

fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

/// `GET /api/advocates`. Pairs keep repeated keys (`degrees=MD&degrees=PhD`).
pub async fn list_advocates_handler(
    State(pool): State<SqlitePool>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AdvocatePage>, ApiError> {
    let plan = QueryPlan::from_params(&ListParams::from_pairs(pairs));

    advocates_service::list_advocates(&pool, &plan)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(error = %e, "Error fetching advocates");
            internal_error("Failed to fetch advocates")
        })
}

pub async fn cities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<CitiesFacet>, ApiError> {
    facets_service::load_cities(&pool).await.map(Json).map_err(|e| {
        warn!(error = %e, "Error fetching cities");
        internal_error("Failed to fetch cities")
    })
}

pub async fn degrees_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<DegreesFacet>, ApiError> {
    facets_service::load_degrees(&pool).await.map(Json).map_err(|e| {
        warn!(error = %e, "Error fetching degrees");
        internal_error("Failed to fetch degrees")
    })
}

pub async fn specialties_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<SpecialtiesFacet>, ApiError> {
    facets_service::load_specialties(&pool)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(error = %e, "Error fetching specialties");
            internal_error("Failed to fetch specialties")
        })
}
