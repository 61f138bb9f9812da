//! Feedback store port
//!
//! Holds human-submitted evidence per case. Submissions are append-only;
//! review transitions them exactly once to ACCEPTED or REJECTED.

use async_trait::async_trait;
use thiserror::Error;
use tribunal_domain::{
    DomainError, FeedbackSubmission, Fingerprint, ReviewDecision, SubmissionId,
};

/// Errors from feedback operations.
#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Submission not found: {0}")]
    NotFound(SubmissionId),

    /// The caller is not authorized to review submissions.
    #[error("Permission denied for reviewer {0}")]
    PermissionDenied(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Feedback store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence port for feedback submissions.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist a new submission.
    async fn insert(&self, submission: FeedbackSubmission) -> Result<(), FeedbackError>;

    /// Fetch one submission.
    async fn get(&self, id: &SubmissionId) -> Result<Option<FeedbackSubmission>, FeedbackError>;

    /// Apply a review decision and return the updated submission.
    ///
    /// Fails with [`DomainError::AlreadyReviewed`] if the submission left
    /// `PENDING_REVIEW` before.
    async fn apply_review(
        &self,
        id: &SubmissionId,
        decision: ReviewDecision,
        reviewer: &str,
    ) -> Result<FeedbackSubmission, FeedbackError>;

    /// All submissions for a case, oldest first.
    async fn submissions_for(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Vec<FeedbackSubmission>, FeedbackError>;
}
