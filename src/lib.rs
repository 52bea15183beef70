//! Student records REST service: CRUD over a single student entity,
//! backed by SQLite or an in-memory map behind the [`StudentStore`] trait.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod storage;

use storage::StudentStore;

/// Assemble the router with the given backing store injected as state.
pub fn app(store: Arc<dyn StudentStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Student Records API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Student endpoints
        .route(
            "/students",
            get(routes::students::list_students).post(routes::students::create_student),
        )
        .route(
            "/students/{id}",
            get(routes::students::get_student)
                .put(routes::students::update_student)
                .delete(routes::students::delete_student),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
