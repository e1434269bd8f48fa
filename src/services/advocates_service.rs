use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::advocates_repo;
use crate::models::AdvocateRow;
use crate::services::advocate_query::{QueryPlan, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i64,
    pub phone_number: String,
    pub created_at: String,
}

impl From<AdvocateRow> for Advocate {
    fn from(row: AdvocateRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            city: row.city,
            degree: row.degree,
            specialties: parse_string_array_json(&row.specialties),
            years_of_experience: row.years_of_experience,
            phone_number: row.phone_number,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// Derives every field from the validated page, page size and match count.
    pub fn new(page: i64, page_size: i64, total_count: i64) -> Self {
        let total_count = total_count.max(0);
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            page,
            page_size,
            total_count,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocatePage {
    pub data: Vec<Advocate>,
    pub pagination: Pagination,
}

/// Count then page, against the same predicate.
///
/// The two statements do not share a snapshot: a write landing between them
/// can make `totalCount` disagree with the rows returned.
pub async fn list_advocates(pool: &SqlitePool, plan: &QueryPlan) -> sqlx::Result<AdvocatePage> {
    let predicate = plan.predicate();

    let total_count = advocates_repo::count_matching(pool, &predicate).await?;

    let rows = advocates_repo::list_page(
        pool,
        &predicate,
        &plan.order_by(),
        plan.page_size,
        plan.offset(),
    )
    .await?;

    Ok(AdvocatePage {
        data: rows.into_iter().map(Advocate::from).collect(),
        pagination: Pagination::new(plan.page, plan.page_size, total_count),
    })
}

pub(crate) fn parse_string_array_json(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw.trim()).unwrap_or_default()
}
