//! Review authority port
//!
//! Decides who may review feedback submissions. Adapters live in the
//! infrastructure layer (e.g. a configured staff list).

/// Staff authorization check for the review API.
pub trait ReviewAuthority: Send + Sync {
    /// Whether `reviewer` is authorized to review submissions.
    fn is_staff(&self, reviewer: &str) -> bool;
}
