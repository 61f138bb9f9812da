//! Application state for HTTP handlers
//!
//! Bundles the wired use cases so handlers share one dependency graph.
//! Generic over the registry and feedback-store ports; the binary picks
//! the concrete adapters.

use tribunal_application::ports::case_registry::CaseRegistry;
use tribunal_application::ports::feedback_store::FeedbackStore;
use tribunal_application::{
    RequestVerdictUseCase, ReviewFeedbackUseCase, SubmitFeedbackUseCase,
};
use std::sync::Arc;

/// Shared state injected into every handler.
pub struct AppState<R, F>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    pub verdicts: Arc<RequestVerdictUseCase<R, F>>,
    pub submit: SubmitFeedbackUseCase<F>,
    pub review: ReviewFeedbackUseCase<F, R>,
}

impl<R, F> AppState<R, F>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    pub fn new(
        verdicts: Arc<RequestVerdictUseCase<R, F>>,
        submit: SubmitFeedbackUseCase<F>,
        review: ReviewFeedbackUseCase<F, R>,
    ) -> Self {
        Self {
            verdicts,
            submit,
            review,
        }
    }
}
