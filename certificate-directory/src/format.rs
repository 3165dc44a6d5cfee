//! Identifier shape checks

// The pattern is a literal; compiling it cannot fail.
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER_REGEX: Regex =
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .unwrap();
}

/// Returns `true` when `candidate`, once trimmed, has the canonical UUID shape.
///
/// The check is purely textual: 36 characters, hexadecimal groups of
/// 8-4-4-4-12 separated by hyphens, any letter case. Version and variant bits
/// are not inspected.
pub fn is_valid_identifier_format(candidate: &str) -> bool {
    IDENTIFIER_REGEX.is_match(candidate.trim())
}

/// Canonical lookup key for an identifier: trimmed and lower-cased.
pub fn normalize_identifier(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}
