//! Résumé ("hoja de vida") upload forwarding for Segispro Engine
//!
//! Candidates applying through the website attach a résumé; this crate posts
//! it as a multipart form to the professionals API configured through
//! `API_URL` and folds every possible outcome into one [`UploadResult`]
//! shape the frontend can render without inspecting status codes.
//!
//! # Outcomes
//!
//! - **Not configured**: no request is made
//! - **Rejected**: the API answered non-2xx; its JSON `message` is surfaced when present
//! - **Network**: the request never completed or the body could not be read
//! - **Accepted**: the API's payload is passed through as `data`
//!
//! # Example
//!
//! ```rust,no_run
//! use upload_service::{UploadClient, UploadConfig, UploadFile};
//!
//! # async fn run() -> Result<(), upload_service::UploadError> {
//! let client = UploadClient::new(&UploadConfig::from_env())?;
//! let file = UploadFile::new("cv.pdf", Some("application/pdf".to_string()), b"%PDF-1.7".to_vec());
//!
//! let result = client.upload(file).await;
//! if !result.ok {
//!     tracing::warn!(error = ?result.error, "Upload failed");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::UploadClient;
pub use config::{UploadConfig, UPLOAD_PATH};
pub use error::UploadError;
pub use types::{UploadFile, UploadResult};
