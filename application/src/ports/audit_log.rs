//! Port for structured verdict auditing.
//!
//! Defines the [`VerdictAuditLog`] trait for recording trial events
//! (decided verdicts, abandoned trials, invalidations, feedback reviews)
//! to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! decision history in a machine-readable format (JSONL).

use serde_json::{Value, json};
use tribunal_domain::{Case, FeedbackSubmission, Fingerprint};

/// A structured audit event.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields; implementations stamp the timestamp.
pub struct AuditEvent {
    /// Event type identifier (e.g., "trial_decided", "case_invalidated").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A trial concluded with a verdict.
    pub fn trial_decided(case: &Case) -> Self {
        Self::new(
            "trial_decided",
            json!({
                "fingerprint": case.fingerprint,
                "verdict": case.verdict,
                "effective_verdict": case.effective_verdict,
                "outcomes": case.juror_outcomes,
            }),
        )
    }

    /// A trial was abandoned without a verdict.
    pub fn trial_abandoned(fingerprint: &Fingerprint, decided: usize, quorum: usize) -> Self {
        Self::new(
            "trial_abandoned",
            json!({
                "fingerprint": fingerprint,
                "decided": decided,
                "quorum": quorum,
            }),
        )
    }

    /// A decided case was marked stale.
    pub fn case_invalidated(fingerprint: &Fingerprint, submission: &FeedbackSubmission) -> Self {
        Self::new(
            "case_invalidated",
            json!({
                "fingerprint": fingerprint,
                "submission_id": submission.id,
            }),
        )
    }

    /// A feedback submission was created or reviewed.
    pub fn feedback_recorded(submission: &FeedbackSubmission) -> Self {
        Self::new(
            "feedback_recorded",
            json!({
                "submission_id": submission.id,
                "fingerprint": submission.case_fingerprint,
                "review_status": submission.review_status,
                "reviewed_by": submission.reviewed_by,
            }),
        )
    }
}

/// Port for recording audit events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `record` method is intentionally synchronous and
/// non-fallible to avoid disrupting the main execution flow - logging
/// failures are handled inside the adapter.
pub trait VerdictAuditLog: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLog;

impl VerdictAuditLog for NoAuditLog {
    fn record(&self, _event: AuditEvent) {}
}
