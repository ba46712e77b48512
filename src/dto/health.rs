use serde::Serialize;
use utoipa::ToSchema;

/// DTO reporting that the service is up
#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        HealthStatus {
            status: "ok".to_owned(),
        }
    }
}
