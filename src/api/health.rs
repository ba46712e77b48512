use crate::SharedData;
use crate::dto::health::HealthStatus;
use crate::routing_utils::Json;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(healthz), components(schemas(HealthStatus)))]
/// Defines the OpenAPI documentation for the health check
pub struct HealthApi;

/// Creates a router serving the liveness probe at "/healthz"
pub fn health_routes() -> Router<Arc<SharedData>> {
    Router::new().route("/healthz", get(healthz))
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "Health",
    responses(
        (status = 200, description = "The service is up", body = HealthStatus),
    ),
)]
/// Reports that the service is up
async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
