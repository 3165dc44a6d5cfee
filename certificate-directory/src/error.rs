use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a certificate set.
///
/// Lookups never fail; only building a directory can.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read certificate file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse certificate records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Certificate identifier is not a valid UUID: {id}")]
    MalformedIdentifier { id: String },

    #[error("Duplicate certificate identifier: {id}")]
    DuplicateIdentifier { id: String },
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
