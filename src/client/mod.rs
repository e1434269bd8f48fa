pub mod api_client;
pub mod list_controller;
pub mod table;

pub use api_client::{ApiClient, ApiClientConfig, ApiError, FacetOptions};
pub use list_controller::{
    FetchTicket, FilterState, ListController, ListRequest, PageTarget, ScrollAnchor, SortState,
};
