//! In-memory feedback store
//!
//! Submissions are append-only; review mutates a submission's status
//! exactly once (enforced by the domain entity). The per-case index keeps
//! submissions in arrival order so "most recent accepted" queries stay
//! trivial.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tribunal_application::ports::feedback_store::{FeedbackError, FeedbackStore};
use tribunal_domain::{
    FeedbackSubmission, Fingerprint, ReviewDecision, SubmissionId,
};

#[derive(Default)]
struct FeedbackInner {
    submissions: HashMap<SubmissionId, FeedbackSubmission>,
    /// Submission ids per case fingerprint, in arrival order.
    by_case: HashMap<Fingerprint, Vec<SubmissionId>>,
}

/// In-memory [`FeedbackStore`] implementation.
#[derive(Default)]
pub struct InMemoryFeedbackStore {
    inner: Mutex<FeedbackInner>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, FeedbackInner>, FeedbackError> {
        self.inner
            .lock()
            .map_err(|e| FeedbackError::Unavailable(format!("feedback store poisoned: {}", e)))
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn insert(&self, submission: FeedbackSubmission) -> Result<(), FeedbackError> {
        let mut inner = self.locked()?;
        inner
            .by_case
            .entry(submission.case_fingerprint.clone())
            .or_default()
            .push(submission.id);
        inner.submissions.insert(submission.id, submission);
        Ok(())
    }

    async fn get(&self, id: &SubmissionId) -> Result<Option<FeedbackSubmission>, FeedbackError> {
        Ok(self.locked()?.submissions.get(id).cloned())
    }

    async fn apply_review(
        &self,
        id: &SubmissionId,
        decision: ReviewDecision,
        reviewer: &str,
    ) -> Result<FeedbackSubmission, FeedbackError> {
        let mut inner = self.locked()?;
        let submission = inner
            .submissions
            .get_mut(id)
            .ok_or(FeedbackError::NotFound(*id))?;
        submission.review(decision, reviewer)?;
        Ok(submission.clone())
    }

    async fn submissions_for(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Vec<FeedbackSubmission>, FeedbackError> {
        let inner = self.locked()?;
        let ids = inner.by_case.get(fingerprint);
        Ok(ids
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| inner.submissions.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }
}
