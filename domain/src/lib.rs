//! Domain layer for tribunal
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Trial
//!
//! A *trial* polls a bench of independent jurors about one unit of content
//! and tallies their decisions into a [`Verdict`]. Trials are keyed by
//! [`Fingerprint`] so identical content is judged once.
//!
//! ## Tally and Override
//!
//! The tally rule ([`TallyRule`]) is a pure vote count with a quorum gate:
//! abstaining jurors never enter the denominator. The override rule
//! ([`OverridePolicy`]) is kept structurally separate - it can downgrade a
//! verdict's severity when the evidence-backed juror roles clear the
//! content, but it can never raise it.

pub mod case;
pub mod core;
pub mod feedback;
pub mod juror;
pub mod verdict;

// Re-export commonly used types
pub use case::{Case, CaseStatus};
pub use core::{
    error::DomainError,
    fingerprint::{Fingerprint, Fingerprinter},
};
pub use feedback::{FeedbackSubmission, ReviewDecision, ReviewStatus, SubmissionId};
pub use juror::{
    decision::JurorDecision,
    outcome::JurorOutcome,
    role::WeightedRole,
};
pub use verdict::{
    classification::{Classification, Verdict},
    overrides::OverridePolicy,
    tally::{Insufficient, TallyRule},
};
