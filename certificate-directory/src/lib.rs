//! Certificate directory for the Segispro Engine
//!
//! Holds the fixed set of certificates Segispro has issued and answers the two
//! questions the public validation page asks: "is this a well-formed
//! certificate code?" and "which certificate does it belong to?".
//!
//! # Key Features
//!
//! - **Format Validation**: canonical 8-4-4-4-12 hexadecimal UUID shape, case-insensitive
//! - **Case-Insensitive Lookup**: identifiers are normalized once at load time
//! - **Immutable Snapshot**: records are loaded at startup and never mutated
//! - **Seed Files**: an alternative record set can be loaded from JSON
//!
//! # Example
//!
//! ```rust
//! use certificate_directory::{is_valid_identifier_format, CertificateDirectory};
//!
//! let directory = CertificateDirectory::seeded();
//! let candidate = " A1B2C3D4-E5F6-7890-ABCD-EF1234567890 ";
//!
//! assert!(is_valid_identifier_format(candidate));
//! let record = directory.find_by_identifier(candidate).unwrap();
//! assert_eq!(record.certificate_code, "CERT-2024-001-AUD");
//! ```

pub mod directory;
pub mod error;
pub mod format;
pub mod record;
pub mod seed;

pub use directory::CertificateDirectory;
pub use error::{DirectoryError, DirectoryResult};
pub use format::{is_valid_identifier_format, normalize_identifier};
pub use record::CertificateRecord;
