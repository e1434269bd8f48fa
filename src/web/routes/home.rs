use askama::Template;
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use tracing::warn;

use crate::services::advocate_query::{SortColumn, MAX_PAGE_SIZE};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub build_id: &'static str,
    pub page_sizes: Vec<i64>,
    pub sort_columns: Vec<&'static str>,
}

pub async fn index_handler() -> impl IntoResponse {
    let template = IndexTemplate {
        build_id: env!("ADVOCATES_BUILD_ID"),
        page_sizes: vec![10, 25, 50, MAX_PAGE_SIZE],
        sort_columns: SortColumn::ALL.iter().map(|c| c.as_str()).collect(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!(error = %e, "Index template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
