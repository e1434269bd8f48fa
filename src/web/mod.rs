pub mod routes;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use routes::{admin, advocates, home};

/// Full application router. The pool is the only shared state.
pub fn build_router(pool: SqlitePool, assets_dir: &str) -> Router {
    let api_routes = Router::new()
        .route("/advocates", get(advocates::list_advocates_handler))
        .route("/advocates/cities", get(advocates::cities_handler))
        .route("/advocates/degrees", get(advocates::degrees_handler))
        .route("/advocates/specialties", get(advocates::specialties_handler))
        .route("/clear-db", post(admin::clear_db_handler))
        .route("/seed", post(admin::seed_handler))
        .route("/seed-large", post(admin::seed_large_handler));

    Router::new()
        .route("/", get(home::index_handler))
        .nest("/api", api_routes)
        .nest_service("/assets", get_service(ServeDir::new(assets_dir)))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
