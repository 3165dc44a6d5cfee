use std::time::Duration;

/// Path of the résumé endpoint, relative to the configured API base URL
pub const UPLOAD_PATH: &str = "/professionals/hv/upload";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Upload client configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Base URL of the professionals API; uploads are refused while unset
    pub api_url: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl UploadConfig {
    /// Reads `API_URL` and `UPLOAD_TIMEOUT_SECONDS` from the environment.
    ///
    /// An empty `API_URL` counts as unset; an unparseable timeout falls back
    /// to the default.
    pub fn from_env() -> Self {
        let api_url = std::env::var("API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let timeout = Duration::from_secs(
            std::env::var("UPLOAD_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        );

        Self { api_url, timeout }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full upload endpoint, or `None` when no API URL is configured
    pub fn endpoint(&self) -> Option<String> {
        self.api_url
            .as_deref()
            .map(|base| format!("{}{}", base.trim().trim_end_matches('/'), UPLOAD_PATH))
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
