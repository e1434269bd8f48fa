use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

use crate::database::facets_repo;
use crate::services::advocates_service::parse_string_array_json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitiesFacet {
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreesFacet {
    pub degrees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtiesFacet {
    pub specialties: Vec<String>,
}

pub async fn load_cities(pool: &SqlitePool) -> sqlx::Result<CitiesFacet> {
    let cities = facets_repo::list_distinct_cities(pool).await?;
    Ok(CitiesFacet { cities })
}

pub async fn load_degrees(pool: &SqlitePool) -> sqlx::Result<DegreesFacet> {
    let degrees = facets_repo::list_distinct_degrees(pool).await?;
    Ok(DegreesFacet { degrees })
}

/// Specialties live in a JSON array per row, so dedup and ordering happen
/// here rather than in SQL.
pub async fn load_specialties(pool: &SqlitePool) -> sqlx::Result<SpecialtiesFacet> {
    let arrays = facets_repo::list_specialty_arrays(pool).await?;
    Ok(SpecialtiesFacet {
        specialties: flatten_specialties(&arrays),
    })
}

fn flatten_specialties(arrays: &[String]) -> Vec<String> {
    arrays
        .iter()
        .flat_map(|raw| parse_string_array_json(raw))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
