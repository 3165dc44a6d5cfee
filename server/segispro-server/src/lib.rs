//! Segispro Server - certificate validation and résumé upload API
//!
//! This library provides the HTTP surface of the Segispro website backend:
//! the public certificate validation endpoint, the résumé upload forwarder,
//! health/version endpoints and the OpenAPI document.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use error::*;
pub use server::{SegisproServer, ServerConfig};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Create the main application router with all routes and middleware
pub fn create_app(server: SegisproServer) -> Router {
    let cors = middleware::create_cors_layer(&server.config.cors_allowed_origins);

    routes::create_routes(server.config.max_upload_bytes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(middleware::handle_panic))
                .layer(cors)
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
