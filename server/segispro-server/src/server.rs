use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use certificate_directory::CertificateDirectory;
use error_common::{Result, SegisproError};
use upload_service::{UploadClient, UploadConfig};

/// Main Segispro server state
#[derive(Clone)]
pub struct SegisproServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Read-only certificate lookup table, loaded once at startup
    pub directory: Arc<CertificateDirectory>,
    /// Résumé forwarding client
    pub uploads: UploadClient,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Optional JSON file replacing the built-in certificate set
    pub certificates_file: Option<PathBuf>,
    /// `max-age` sent with successful certificate validations, in seconds
    pub certificate_cache_max_age: u64,
    /// Largest accepted upload request body, in bytes
    pub max_upload_bytes: usize,
    /// Origins allowed by CORS; empty means any origin
    pub cors_allowed_origins: Vec<String>,
    /// Résumé forwarding settings
    pub upload: UploadConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let certificates_file = std::env::var("CERTIFICATES_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let certificate_cache_max_age = std::env::var("CERTIFICATE_CACHE_MAX_AGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.certificate_cache_max_age);

        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_upload_bytes);

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: defaults.name,
            certificates_file,
            certificate_cache_max_age,
            max_upload_bytes,
            cors_allowed_origins,
            upload: UploadConfig::from_env(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Segispro Engine".to_string(),
            certificates_file: None,
            certificate_cache_max_age: 300,
            max_upload_bytes: 10 * 1024 * 1024,
            cors_allowed_origins: Vec::new(),
            upload: UploadConfig {
                api_url: None,
                timeout: Duration::from_secs(30),
            },
        }
    }
}

impl SegisproServer {
    /// Create a new Segispro server instance
    ///
    /// Loads the certificate set (from `certificates_file` when configured,
    /// otherwise the built-in records) and builds the upload client.
    ///
    /// # Errors
    ///
    /// Returns [`SegisproError::DataLoadError`] when the certificate file is
    /// unreadable or rejected, and [`SegisproError::ConfigError`] when the
    /// upload client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let directory = match &config.certificates_file {
            Some(path) => CertificateDirectory::from_json_file(path)
                .map_err(|e| SegisproError::DataLoadError(e.to_string()))?,
            None => CertificateDirectory::seeded(),
        };

        tracing::info!(
            records = directory.len(),
            source = config
                .certificates_file
                .as_ref()
                .map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
            "Certificate directory loaded"
        );

        Self::with_directory(config, directory)
    }

    /// Create a server over an already-built directory
    /// This is useful for testing
    ///
    /// # Errors
    ///
    /// Returns [`SegisproError::ConfigError`] when the upload client cannot be built.
    pub fn with_directory(config: ServerConfig, directory: CertificateDirectory) -> Result<Self> {
        let uploads = UploadClient::new(&config.upload)
            .map_err(|e| SegisproError::ConfigError(e.to_string()))?;

        if !uploads.is_configured() {
            tracing::warn!("API_URL is not set; résumé uploads will be refused");
        }

        Ok(Self {
            config,
            directory: Arc::new(directory),
            uploads,
            started_at: Instant::now(),
        })
    }

    /// Get server configuration
    pub fn get_config(&self) -> &ServerConfig {
        &self.config
    }

    /// Seconds since the server state was built
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for SegisproServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegisproServer")
            .field("config", &self.config)
            .field("certificates", &self.directory.len())
            .field("uploads_configured", &self.uploads.is_configured())
            .finish_non_exhaustive()
    }
}
