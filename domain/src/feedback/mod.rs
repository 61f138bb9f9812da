//! Human feedback submissions
//!
//! End users submit evidence against a case; staff review it. A submission
//! is mutable only through review, and exactly once: ACCEPTED and REJECTED
//! are terminal. Acceptance makes the evidence visible to the community
//! watch record and invalidates the associated case so the next lookup
//! re-tries it - it never changes a verdict directly.

use crate::core::error::DomainError;
use crate::core::fingerprint::Fingerprint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum evidence length accepted from end users.
pub const MIN_EVIDENCE_CHARS: usize = 10;

/// Identifier of one feedback submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    PendingReview,
    Accepted,
    Rejected,
}

/// A staff reviewer's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Accepted,
    Rejected,
}

impl From<ReviewDecision> for ReviewStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Accepted => ReviewStatus::Accepted,
            ReviewDecision::Rejected => ReviewStatus::Rejected,
        }
    }
}

/// Evidence submitted by an end user against a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub id: SubmissionId,
    pub case_fingerprint: Fingerprint,
    pub submitter: String,
    pub evidence: String,
    pub review_status: ReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackSubmission {
    /// Create a new submission awaiting review.
    ///
    /// Rejects evidence shorter than [`MIN_EVIDENCE_CHARS`].
    pub fn new(
        case_fingerprint: Fingerprint,
        submitter: impl Into<String>,
        evidence: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let evidence = evidence.into();
        let chars = evidence.trim().chars().count();
        if chars < MIN_EVIDENCE_CHARS {
            return Err(DomainError::EvidenceTooShort {
                got: chars,
                min: MIN_EVIDENCE_CHARS,
            });
        }

        Ok(Self {
            id: SubmissionId::new(),
            case_fingerprint,
            submitter: submitter.into(),
            evidence,
            review_status: ReviewStatus::PendingReview,
            reviewed_by: None,
            submitted_at: Utc::now(),
        })
    }

    /// Apply a staff review decision. Terminal: a submission can be
    /// reviewed exactly once.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        reviewer: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.review_status != ReviewStatus::PendingReview {
            return Err(DomainError::AlreadyReviewed);
        }
        self.review_status = decision.into();
        self.reviewed_by = Some(reviewer.into());
        Ok(())
    }

    pub fn is_accepted(&self) -> bool {
        self.review_status == ReviewStatus::Accepted
    }
}
