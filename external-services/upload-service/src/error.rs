use thiserror::Error;

/// Message used when a transport failure carries no description of its own
pub const NETWORK_FALLBACK_MESSAGE: &str = "Error de red al enviar la hoja de vida";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("API_URL no está definida en el entorno")]
    NotConfigured,

    /// The API answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("Archivo inválido: {0}")]
    InvalidFile(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl UploadError {
    pub(crate) fn network(error: &reqwest::Error) -> Self {
        let message = error.to_string();
        if message.trim().is_empty() {
            UploadError::Network(NETWORK_FALLBACK_MESSAGE.to_string())
        } else {
            UploadError::Network(message)
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            UploadError::NotConfigured => "not_configured",
            UploadError::Rejected { .. } => "rejected",
            UploadError::Network(_) => "network_error",
            UploadError::InvalidFile(_) => "invalid_file",
            UploadError::Client(_) => "client_error",
        }
    }
}

pub type UploadServiceResult<T> = Result<T, UploadError>;
