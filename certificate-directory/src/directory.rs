use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{DirectoryError, DirectoryResult};
use crate::format::{is_valid_identifier_format, normalize_identifier};
use crate::record::CertificateRecord;
use crate::seed::seeded_records;

/// Immutable lookup table of issued certificates.
///
/// Built once at startup and shared read-only for the lifetime of the
/// process. Records keep their load order; the index maps each normalized
/// identifier to the position of its record.
#[derive(Debug, Clone)]
pub struct CertificateDirectory {
    records: Vec<CertificateRecord>,
    index: HashMap<String, usize>,
}

impl CertificateDirectory {
    /// Directory over the certificates shipped with the site.
    pub fn seeded() -> Self {
        Self::build(seeded_records())
    }

    /// Builds a directory from caller-supplied records.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::MalformedIdentifier`] when a record id does not
    /// have the UUID shape, and [`DirectoryError::DuplicateIdentifier`] when two
    /// ids are equal ignoring case and surrounding whitespace.
    pub fn from_records(records: Vec<CertificateRecord>) -> DirectoryResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !is_valid_identifier_format(&record.id) {
                return Err(DirectoryError::MalformedIdentifier {
                    id: record.id.clone(),
                });
            }
            if !seen.insert(normalize_identifier(&record.id)) {
                return Err(DirectoryError::DuplicateIdentifier {
                    id: record.id.clone(),
                });
            }
        }

        Ok(Self::build(records))
    }

    /// Parses a JSON array of records.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or on any of the conditions of [`Self::from_records`].
    pub fn from_json_str(json: &str) -> DirectoryResult<Self> {
        let records: Vec<CertificateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Loads a JSON array of records from disk.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its content is rejected by
    /// [`Self::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> DirectoryResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let directory = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            records = directory.len(),
            "Loaded certificate records from file"
        );
        Ok(directory)
    }

    fn build(records: Vec<CertificateRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            // Earlier records win, matching a front-to-back scan.
            index
                .entry(normalize_identifier(&record.id))
                .or_insert(position);
        }

        Self { records, index }
    }

    /// Finds the certificate whose id equals `candidate`, ignoring case and
    /// surrounding whitespace.
    ///
    /// The candidate's format is not checked here; callers that need to tell
    /// malformed input apart from unknown input call
    /// [`is_valid_identifier_format`] first.
    pub fn find_by_identifier(&self, candidate: &str) -> Option<&CertificateRecord> {
        let key = normalize_identifier(candidate);
        let found = self
            .index
            .get(&key)
            .and_then(|position| self.records.get(*position));

        debug!(identifier = %key, found = found.is_some(), "Certificate lookup");
        found
    }

    /// Records in load order.
    pub fn records(&self) -> &[CertificateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CertificateDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
