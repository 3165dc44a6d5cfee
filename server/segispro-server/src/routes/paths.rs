//! Centralized API route path constants
//!
//! utoipa `#[path(...)]` attributes need string literals, so the paths in
//! handler annotations must be kept equal to these constants by hand.

/// API base path
pub const API: &str = "/api";

/// Health check endpoints
pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

/// Certificate validation endpoints
pub mod certificates {
    pub const VALIDATE: &str = "/validar-certificado";
    pub const VALIDATE_FULL: &str = "/api/validar-certificado";
}

/// Résumé upload endpoints
pub mod uploads {
    pub const HOJA_DE_VIDA: &str = "/hoja-de-vida";
    pub const HOJA_DE_VIDA_FULL: &str = "/api/hoja-de-vida";
}

/// API documentation endpoints
pub mod docs {
    pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
}
