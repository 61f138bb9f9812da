//! Core domain concepts shared across all subdomains.
//!
//! - [`fingerprint::Fingerprint`] - stable content identity, the sole cache key
//! - [`error::DomainError`] - domain-level error type

pub mod error;
pub mod fingerprint;

pub use error::DomainError;
pub use fingerprint::{Fingerprint, Fingerprinter};
