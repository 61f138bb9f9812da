//! Review Feedback use case
//!
//! Staff review of a submission. Accepting does not itself change any
//! verdict: it makes the evidence visible to the community record and
//! invalidates the associated case, so the next lookup re-tries it with
//! the feedback incorporated.

use crate::ports::audit_log::{AuditEvent, VerdictAuditLog};
use crate::ports::case_registry::{CaseRegistry, RegistryError};
use crate::ports::feedback_store::{FeedbackError, FeedbackStore};
use crate::ports::review_authority::ReviewAuthority;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use tribunal_domain::{FeedbackSubmission, ReviewDecision, SubmissionId};

/// Errors that can occur during feedback review.
#[derive(Error, Debug)]
pub enum ReviewFeedbackError {
    /// The caller is not staff-authorized. No state change occurred.
    #[error("Permission denied for reviewer {0}")]
    PermissionDenied(String),

    #[error("Feedback store error: {0}")]
    Store(#[from] FeedbackError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Input for the ReviewFeedback use case.
#[derive(Debug, Clone)]
pub struct ReviewFeedbackInput {
    pub submission_id: SubmissionId,
    pub decision: ReviewDecision,
    pub reviewer: String,
}

/// Use case for staff review of feedback submissions.
pub struct ReviewFeedbackUseCase<F, R>
where
    F: FeedbackStore + 'static,
    R: CaseRegistry + 'static,
{
    store: Arc<F>,
    registry: Arc<R>,
    authority: Arc<dyn ReviewAuthority>,
    audit: Arc<dyn VerdictAuditLog>,
}

impl<F, R> ReviewFeedbackUseCase<F, R>
where
    F: FeedbackStore + 'static,
    R: CaseRegistry + 'static,
{
    pub fn new(
        store: Arc<F>,
        registry: Arc<R>,
        authority: Arc<dyn ReviewAuthority>,
        audit: Arc<dyn VerdictAuditLog>,
    ) -> Self {
        Self {
            store,
            registry,
            authority,
            audit,
        }
    }

    pub async fn execute(
        &self,
        input: ReviewFeedbackInput,
    ) -> Result<FeedbackSubmission, ReviewFeedbackError> {
        if !self.authority.is_staff(&input.reviewer) {
            warn!(
                reviewer = %input.reviewer,
                submission = %input.submission_id,
                "Unauthorized review attempt"
            );
            return Err(ReviewFeedbackError::PermissionDenied(input.reviewer));
        }

        let submission = self
            .store
            .apply_review(&input.submission_id, input.decision, &input.reviewer)
            .await?;

        info!(
            submission = %submission.id,
            status = ?submission.review_status,
            reviewer = %input.reviewer,
            "Feedback reviewed"
        );
        self.audit.record(AuditEvent::feedback_recorded(&submission));

        if submission.is_accepted() {
            // A fresh trial will incorporate the accepted evidence.
            self.registry
                .invalidate(&submission.case_fingerprint)
                .await?;
            self.audit.record(AuditEvent::case_invalidated(
                &submission.case_fingerprint,
                &submission,
            ));
        }

        Ok(submission)
    }
}
