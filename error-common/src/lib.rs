//! Common error handling utilities for Segispro Engine
//!
//! Process-level error type shared by the Segispro binaries. Library crates
//! keep their own `thiserror` enums and are converted into [`SegisproError`]
//! at the point where a failure aborts startup or serving.
//!
//! # Error Categories
//!
//! - **NetworkError**: binding sockets and other transport failures
//! - **ServerError**: the HTTP server stopped with an error
//! - **DataLoadError**: reference data (certificate seed files) was rejected
//! - **ConfigError**: invalid configuration values
//!
//! # Example
//!
//! ```rust
//! use error_common::{log_error, Result, SegisproError};
//!
//! fn load_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|e| SegisproError::ConfigError(format!("invalid port {raw:?}: {e}")))
//! }
//!
//! if let Err(e) = load_port("http") {
//!     log_error("startup", &e);
//! }
//! ```

pub mod types;

pub use types::*;
