use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use upload_service::{UploadError, UploadFile, UploadResult};
use utoipa::ToSchema;

use crate::server::SegisproServer;

/// Multipart field holding the résumé
const FILE_FIELD: &str = "file";

pub const MISSING_FILE_MESSAGE: &str = "Debe adjuntar un archivo";

/// Multipart form accepted by the upload endpoint
#[derive(Debug, ToSchema)]
pub struct HojaDeVidaForm {
    /// Résumé file (PDF, DOCX, ...)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

fn reply(status: StatusCode, result: UploadResult) -> Response {
    (status, Json(result)).into_response()
}

/// HTTP status for a failed forward
fn status_for(error: &UploadError) -> StatusCode {
    match error {
        UploadError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        UploadError::Rejected { .. } | UploadError::Network(_) => StatusCode::BAD_GATEWAY,
        UploadError::InvalidFile(_) => StatusCode::BAD_REQUEST,
        UploadError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Pulls the `file` part out of the form, skipping any other fields.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(FILE_FIELD).to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Some(UploadFile::new(file_name, content_type, bytes.to_vec())));
    }

    Ok(None)
}

/// Résumé upload handler
///
/// Always answers with an `UploadResult` body, whatever went wrong.
#[utoipa::path(
    post,
    path = "/api/hoja-de-vida",
    tag = "uploads",
    request_body(content = HojaDeVidaForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Résumé forwarded", body = UploadResult),
        (status = 400, description = "No file attached or malformed form", body = UploadResult),
        (status = 413, description = "Upload exceeds the size limit", body = UploadResult),
        (status = 502, description = "Professionals API rejected the file or was unreachable", body = UploadResult),
        (status = 503, description = "Upload destination not configured", body = UploadResult)
    )
)]
pub async fn upload_hoja_de_vida(
    State(server): State<SegisproServer>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not a multipart form");
            return reply(rejection.status(), UploadResult::failure(rejection.body_text()));
        }
    };

    let file = match read_file_field(&mut multipart).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return reply(StatusCode::BAD_REQUEST, UploadResult::failure(MISSING_FILE_MESSAGE));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read upload form");
            return reply(e.status(), UploadResult::failure(e.body_text()));
        }
    };

    match server.uploads.try_upload(file).await {
        Ok(payload) => reply(StatusCode::OK, UploadResult::success(payload)),
        Err(e) => {
            tracing::warn!(error_type = e.error_type(), error = %e, "Résumé upload failed");
            reply(status_for(&e), UploadResult::from(e))
        }
    }
}
