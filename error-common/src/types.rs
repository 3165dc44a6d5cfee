use thiserror::Error;

/// Process-level error for the Segispro binaries
#[derive(Error, Debug)]
pub enum SegisproError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Reference data could not be loaded
    #[error("Data load error: {0}")]
    DataLoadError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegisproError {
    /// Short machine-readable category, used as a structured log field
    pub fn error_type(&self) -> &'static str {
        match self {
            SegisproError::NetworkError(_) => "network_error",
            SegisproError::ServerError(_) => "server_error",
            SegisproError::DataLoadError(_) => "data_load_error",
            SegisproError::ConfigError(_) => "configuration_error",
            SegisproError::InternalError(_) => "internal_error",
            SegisproError::Other(_) => "other",
        }
    }
}

/// Result type alias for Segispro operations
pub type Result<T> = std::result::Result<T, SegisproError>;

/// Logs an error with its category and the caller-supplied context
pub fn log_error(context: &str, error: &SegisproError) {
    tracing::error!(
        context = context,
        error_type = error.error_type(),
        error = %error,
        "Segispro error occurred"
    );
}
