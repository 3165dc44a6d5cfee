use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::UploadError;

/// A file received from a candidate, ready to be forwarded
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }
}

/// Uniform result of an upload attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadResult {
    pub ok: bool,
    /// Payload returned by the professionals API on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    /// Human-readable failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "API_URL no está definida en el entorno")]
    pub error: Option<String>,
}

impl UploadResult {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl From<UploadError> for UploadResult {
    fn from(error: UploadError) -> Self {
        Self::failure(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_omits_data() {
        let value = serde_json::to_value(UploadResult::failure("sin red")).unwrap();
        assert_eq!(value, json!({ "ok": false, "error": "sin red" }));
    }

    #[test]
    fn success_omits_error() {
        let value = serde_json::to_value(UploadResult::success(json!({ "id": 7 }))).unwrap();
        assert_eq!(value, json!({ "ok": true, "data": { "id": 7 } }));
    }

    #[test]
    fn not_configured_message_is_user_facing() {
        let result = UploadResult::from(UploadError::NotConfigured);
        assert_eq!(
            result.error.as_deref(),
            Some("API_URL no está definida en el entorno")
        );
    }
}
