pub mod advocate_query;
pub mod advocates_service;
pub mod facets_service;
pub mod seed_data;
pub mod seed_service;
