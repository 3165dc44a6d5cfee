pub mod paths;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{certificates, health, uploads},
    openapi,
    server::SegisproServer,
};

/// Create health check routes
pub fn health_routes() -> Router<SegisproServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create certificate validation routes
pub fn certificate_routes() -> Router<SegisproServer> {
    Router::new().route(
        paths::certificates::VALIDATE,
        get(certificates::validate_certificate),
    )
}

/// Create résumé upload routes, capped at `max_upload_bytes` per request
pub fn upload_routes(max_upload_bytes: usize) -> Router<SegisproServer> {
    Router::new()
        .route(
            paths::uploads::HOJA_DE_VIDA,
            post(uploads::upload_hoja_de_vida),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Create all application routes
pub fn create_routes(max_upload_bytes: usize) -> Router<SegisproServer> {
    Router::new()
        // Health check routes
        .merge(health_routes())
        // API documentation routes
        .merge(openapi::create_docs_routes())
        // Public API routes
        .nest(
            paths::API,
            certificate_routes().merge(upload_routes(max_upload_bytes)),
        )
}
