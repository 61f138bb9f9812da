//! Submit Feedback use case
//!
//! End users submit evidence against a case. Submission never changes a
//! verdict by itself - it only enters the review queue.

use crate::ports::audit_log::{AuditEvent, VerdictAuditLog};
use crate::ports::feedback_store::{FeedbackError, FeedbackStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use tribunal_domain::{DomainError, FeedbackSubmission, Fingerprint, SubmissionId};

/// Errors that can occur during feedback submission.
#[derive(Error, Debug)]
pub enum SubmitFeedbackError {
    /// The submission failed domain validation (e.g. evidence too short).
    #[error("Invalid submission: {0}")]
    Invalid(#[from] DomainError),

    #[error("Feedback store error: {0}")]
    Store(#[from] FeedbackError),
}

/// Input for the SubmitFeedback use case.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub fingerprint: Fingerprint,
    pub submitter: String,
    pub evidence: String,
}

/// Use case for submitting feedback evidence.
pub struct SubmitFeedbackUseCase<F: FeedbackStore + 'static> {
    store: Arc<F>,
    audit: Arc<dyn VerdictAuditLog>,
}

impl<F: FeedbackStore + 'static> SubmitFeedbackUseCase<F> {
    pub fn new(store: Arc<F>, audit: Arc<dyn VerdictAuditLog>) -> Self {
        Self { store, audit }
    }

    pub async fn execute(
        &self,
        input: SubmitFeedbackInput,
    ) -> Result<SubmissionId, SubmitFeedbackError> {
        let submission =
            FeedbackSubmission::new(input.fingerprint, input.submitter, input.evidence)?;
        let id = submission.id;

        self.store.insert(submission.clone()).await?;

        info!(
            submission = %id,
            fingerprint = submission.case_fingerprint.short(),
            "Feedback submitted for review"
        );
        self.audit.record(AuditEvent::feedback_recorded(&submission));

        Ok(id)
    }
}
