use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::client::list_controller::{FetchTicket, ListController, ListRequest, ScrollAnchor};
use crate::services::advocates_service::AdvocatePage;
use crate::services::facets_service::{CitiesFacet, DegreesFacet, SpecialtiesFacet};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ADVOCATES_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
        }
    }
}

/// Filter choices shown next to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub cities: Vec<String>,
    pub degrees: Vec<String>,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn fetch_page(&self, request: &ListRequest) -> Result<AdvocatePage, ApiError> {
        self.get_json("/api/advocates", &request.to_query_pairs())
            .await
    }

    /// Runs `ticket` and folds the outcome into `controller`. Returns the
    /// scroll position to restore when the response was applied.
    pub async fn execute(
        &self,
        controller: &mut ListController,
        ticket: FetchTicket,
    ) -> Option<ScrollAnchor> {
        match self.fetch_page(&ticket.request).await {
            Ok(page) => {
                if controller.apply_response(ticket.generation, page) {
                    ticket.restore_scroll
                } else {
                    None
                }
            }
            Err(e) => {
                warn!(error = %e, "Error fetching advocates");
                controller.apply_failure(ticket.generation);
                None
            }
        }
    }

    /// Facet lists load independently; one failing leaves that list empty.
    pub async fn load_facets(&self) -> FacetOptions {
        let (cities, degrees, specialties) = tokio::join!(
            self.get_json::<CitiesFacet>("/api/advocates/cities", &[]),
            self.get_json::<DegreesFacet>("/api/advocates/degrees", &[]),
            self.get_json::<SpecialtiesFacet>("/api/advocates/specialties", &[]),
        );

        FacetOptions {
            cities: cities.map(|f| f.cities).unwrap_or_else(|e| {
                warn!(error = %e, "Error fetching cities");
                Vec::new()
            }),
            degrees: degrees.map(|f| f.degrees).unwrap_or_else(|e| {
                warn!(error = %e, "Error fetching degrees");
                Vec::new()
            }),
            specialties: specialties.map(|f| f.specialties).unwrap_or_else(|e| {
                warn!(error = %e, "Error fetching specialties");
                Vec::new()
            }),
        }
    }
}
