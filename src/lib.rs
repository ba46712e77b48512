//! In-memory todo tracking service exposed over a JSON HTTP API

pub mod api;
pub mod app_env;
pub mod domain;
pub mod dto;
pub mod logging;
pub mod persistence;
pub mod routing_utils;

use axum::Router;
use axum::extract::State;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state handed to every request handler
#[derive(Default)]
pub struct SharedData {
    pub todo_store: persistence::InMemoryTodoStore,
}

type AppState = State<Arc<SharedData>>;

/// Assembles the full HTTP application around [shared_data]: the health check, the todo API,
/// API documentation, request tracing and a CORS policy which admits any origin.
pub fn build_app(shared_data: SharedData) -> Router {
    let router = Router::new()
        .merge(api::health::health_routes())
        .nest("/api/todos", api::todo::todo_routes())
        .merge(api::swagger_main::build_documentation())
        .with_state(Arc::new(shared_data));

    // Mirrors the caller's origin so credentialed requests are allowed from anywhere
    logging::attach_tracing_http(router).layer(CorsLayer::very_permissive())
}
