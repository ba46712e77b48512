use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Todo API",
    description = "Creates, lists, updates, toggles and deletes todos held in memory"
))]
struct RootApi;

/// Path the generated OpenAPI document is served from
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Constructs the routes which render the Swagger UI at "/docs" and return the OpenAPI schema.
/// Merges in OpenAPI definitions from the submodules of [api][crate::api].
pub fn build_documentation() -> SwaggerUi {
    let mut api_docs = RootApi::openapi();
    api_docs.merge(super::health::HealthApi::openapi());
    api_docs.merge(super::todo::TodoApi::openapi());

    SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, api_docs)
}
