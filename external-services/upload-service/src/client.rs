use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::UploadConfig;
use crate::error::{UploadError, UploadServiceResult};
use crate::types::{UploadFile, UploadResult};

/// Name of the multipart field the professionals API reads
const FILE_FIELD: &str = "file";

/// Forwards résumé files to the professionals API
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl UploadClient {
    /// Create a new upload client
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Client`] when the underlying HTTP client cannot
    /// be built (for example, when no TLS backend is available).
    pub fn new(config: &UploadConfig) -> UploadServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UploadError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    /// Whether an API URL was configured
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Uploads `file` and folds the outcome into an [`UploadResult`].
    pub async fn upload(&self, file: UploadFile) -> UploadResult {
        match self.try_upload(file).await {
            Ok(payload) => UploadResult::success(payload),
            Err(e) => UploadResult::from(e),
        }
    }

    /// Uploads `file`, returning the API's payload on a 2xx answer.
    ///
    /// The payload is parsed as JSON when the response declares
    /// `application/json` and is returned as a JSON string otherwise.
    ///
    /// # Errors
    ///
    /// - [`UploadError::NotConfigured`] when no API URL is set; nothing is sent
    /// - [`UploadError::InvalidFile`] when the declared content type is not a valid MIME type
    /// - [`UploadError::Rejected`] for non-2xx answers
    /// - [`UploadError::Network`] when the request or the body read fails
    pub async fn try_upload(&self, file: UploadFile) -> UploadServiceResult<Value> {
        let endpoint = self.endpoint.as_deref().ok_or(UploadError::NotConfigured)?;

        let file_name = file.file_name.clone();
        let size = file.bytes.len();

        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| UploadError::InvalidFile(e.to_string()))?;
        }
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %endpoint, error = %e, "Résumé upload request failed");
                UploadError::network(&e)
            })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let payload = if is_json {
            response
                .json::<Value>()
                .await
                .map_err(|e| UploadError::network(&e))?
        } else {
            Value::String(response.text().await.map_err(|e| UploadError::network(&e))?)
        };

        if !status.is_success() {
            let message = rejection_message(status, &payload);
            warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                message = %message,
                "Résumé upload rejected"
            );
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        info!(
            file_name = %file_name,
            size_bytes = size,
            status = status.as_u16(),
            "Résumé uploaded successfully"
        );
        Ok(payload)
    }
}

/// Picks the API's own `message` when it sent one, else a status line.
fn rejection_message(status: reqwest::StatusCode, payload: &Value) -> String {
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map_or_else(
            || {
                format!(
                    "Error {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
                .trim_end()
                .to_string()
            },
            str::to_string,
        )
}
