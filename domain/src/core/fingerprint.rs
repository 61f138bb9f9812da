//! Content fingerprinting
//!
//! A [`Fingerprint`] is the stable identity of one unit of content and the
//! sole key used for case lookup and caching. Fingerprinting is pure and
//! deterministic over *normalized* content, so trivially reformatted copies
//! of the same text land on the same case. Hash collisions are treated as
//! "same case" by design - this is a documented approximation, not a bug.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identity for a unit of content.
///
/// Internally a hex-encoded SHA-256 of the normalized content.
///
/// # Example
///
/// ```
/// use tribunal_domain::Fingerprinter;
///
/// let fp = Fingerprinter::default();
/// assert_eq!(fp.fingerprint("Hello  World"), fp.fingerprint("hello world"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parse a fingerprint from its hex representation.
    ///
    /// Accepts exactly 64 lowercase or uppercase hex characters.
    pub fn from_hex(hex: impl Into<String>) -> Result<Self, DomainError> {
        let hex = hex.into();
        if hex.len() != 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidFingerprint(hex));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// The hex representation of this fingerprint.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix for log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives [`Fingerprint`]s from raw content.
///
/// Normalization collapses Unicode whitespace runs to a single space,
/// trims, lowercases, and caps the input at `max_content_chars` before
/// hashing. The cap bounds juror payload size as well, so the fingerprint
/// always matches the content the bench actually saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fingerprinter {
    /// Maximum number of characters considered for identity and judgment.
    pub max_content_chars: usize,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self {
            max_content_chars: 12_000,
        }
    }
}

impl Fingerprinter {
    pub fn new(max_content_chars: usize) -> Self {
        Self { max_content_chars }
    }

    /// Normalize content: collapse whitespace, trim, lowercase, cap length.
    pub fn normalize(&self, content: &str) -> String {
        let collapsed = content
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        collapsed.chars().take(self.max_content_chars).collect()
    }

    /// Derive the fingerprint of a unit of content.
    ///
    /// Pure and deterministic: identical normalized content always yields
    /// the same fingerprint.
    pub fn fingerprint(&self, content: &str) -> Fingerprint {
        let normalized = self.normalize(content);
        let digest = Sha256::digest(normalized.as_bytes());
        Fingerprint(format!("{:x}", digest))
    }
}
