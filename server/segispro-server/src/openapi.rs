use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::routes::paths;
use crate::server::SegisproServer;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,

        // Certificate endpoints
        crate::handlers::certificates::validate_certificate,

        // Upload endpoints
        crate::handlers::uploads::upload_hoja_de_vida,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
            crate::handlers::certificates::CertificateValidationResponse,
            crate::handlers::uploads::HojaDeVidaForm,
            crate::error::ApiErrorResponse,
            certificate_directory::CertificateRecord,
            upload_service::UploadResult,
        )
    ),
    tags(
        (name = "health", description = "System health and version endpoints"),
        (name = "certificates", description = "Public certificate validation"),
        (name = "uploads", description = "Résumé submission for prospective professionals"),
    ),
    info(
        title = "Segispro Engine API",
        version = "0.1.0",
        description = "Backend for the Segispro website: certificate validation and résumé uploads.",
        contact(
            name = "Segispro Team",
            email = "dev@segispro.com",
            url = "https://segispro.com"
        ),
    ),
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create API documentation routes
pub fn create_docs_routes() -> Router<SegisproServer> {
    Router::new().route(paths::docs::OPENAPI_JSON, get(openapi_json))
}
