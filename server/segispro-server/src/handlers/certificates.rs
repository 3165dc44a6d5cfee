use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use certificate_directory::{is_valid_identifier_format, CertificateRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ApiErrorResponse};
use crate::server::SegisproServer;

/// Name of the query parameter carrying the certificate code
const UUID_PARAM: &str = "uuid";

/// Successful certificate validation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateValidationResponse {
    #[schema(example = true)]
    pub success: bool,
    pub certificado: CertificateRecord,
}

/// First non-empty value of the `uuid` parameter, if any.
///
/// Repeated parameters resolve to the first occurrence.
fn requested_identifier(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(name, _)| name == UUID_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

/// Certificate validation handler
///
/// A whitespace-only `uuid` counts as present and fails the format check.
#[utoipa::path(
    get,
    path = "/api/validar-certificado",
    tag = "certificates",
    params(
        ("uuid" = Option<String>, Query, description = "Certificate verification code", example = "a1b2c3d4-e5f6-7890-abcd-ef1234567890")
    ),
    responses(
        (status = 200, description = "Certificate found", body = CertificateValidationResponse,
            headers(("Cache-Control" = String, description = "public, max-age=300"))),
        (status = 400, description = "Missing or malformed code", body = ApiErrorResponse),
        (status = 404, description = "No certificate with this code", body = ApiErrorResponse)
    )
)]
pub async fn validate_certificate(
    State(server): State<SegisproServer>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = requested_identifier(&params).ok_or(ApiError::MissingInput)?;

    if !is_valid_identifier_format(candidate) {
        return Err(ApiError::MalformedIdentifier);
    }

    let record = server
        .directory
        .find_by_identifier(candidate)
        .cloned()
        .ok_or(ApiError::NotFound)?;

    tracing::info!(
        certificate_id = %record.id,
        certificate_code = %record.certificate_code,
        "Certificate validated"
    );

    let cache_control = format!(
        "public, max-age={}",
        server.config.certificate_cache_max_age
    );

    Ok((
        [(header::CACHE_CONTROL, cache_control)],
        Json(CertificateValidationResponse {
            success: true,
            certificado: record,
        }),
    ))
}
