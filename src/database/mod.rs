pub mod advocates_repo;
pub mod facets_repo;
pub mod schema;
