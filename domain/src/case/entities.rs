//! Case entity and status state machine
//!
//! A case is created on the first trial request for a fingerprint and owned
//! exclusively by the case registry. Outcomes and feedback are appended,
//! never removed; a re-trial creates a new case version and marks the prior
//! one STALE instead of mutating a decided case in place.

use crate::core::error::DomainError;
use crate::core::fingerprint::Fingerprint;
use crate::feedback::FeedbackSubmission;
use crate::juror::outcome::JurorOutcome;
use crate::verdict::classification::{Classification, Verdict};
use crate::verdict::overrides::OverridePolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a case.
///
/// Transitions: `PENDING -> IN_TRIAL -> DECIDED`, exactly once per trial.
/// `STALE` is only reachable from `DECIDED` via invalidation; an
/// insufficient trial falls back from `IN_TRIAL` to `PENDING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    Pending,
    InTrial,
    Decided,
    Stale,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "PENDING",
            CaseStatus::InTrial => "IN_TRIAL",
            CaseStatus::Decided => "DECIDED",
            CaseStatus::Stale => "STALE",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-fingerprint trial record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub fingerprint: Fingerprint,
    pub status: CaseStatus,
    /// Outcomes recorded by the juror pool, in bench order, append-only.
    pub juror_outcomes: Vec<JurorOutcome>,
    /// Base verdict from the tally rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    /// Post-override classification; set together with the verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_verdict: Option<Classification>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    /// Feedback view, hydrated from the feedback store on lookup.
    #[serde(default)]
    pub feedback: Vec<FeedbackSubmission>,
}

impl Case {
    /// Create a fresh case that is immediately in trial.
    pub fn open_trial(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            status: CaseStatus::InTrial,
            juror_outcomes: Vec::new(),
            verdict: None,
            effective_verdict: None,
            created_at: Utc::now(),
            decided_at: None,
            feedback: Vec::new(),
        }
    }

    pub fn is_decided(&self) -> bool {
        self.status == CaseStatus::Decided
    }

    pub fn is_stale(&self) -> bool {
        self.status == CaseStatus::Stale
    }

    pub fn in_trial(&self) -> bool {
        self.status == CaseStatus::InTrial
    }

    /// Append the outcome set of the current trial attempt.
    pub fn append_outcomes(&mut self, outcomes: Vec<JurorOutcome>) {
        self.juror_outcomes.extend(outcomes);
    }

    /// Conclude the trial with a verdict (`IN_TRIAL -> DECIDED`).
    ///
    /// Also fixes the effective classification by applying the
    /// weighted-role override to this trial's outcomes. The base verdict
    /// is stored unchanged for audit.
    pub fn decide(&mut self, verdict: Verdict) -> Result<(), DomainError> {
        match self.status {
            CaseStatus::InTrial => {
                self.effective_verdict =
                    Some(OverridePolicy::effective(&verdict, &self.juror_outcomes));
                self.verdict = Some(verdict);
                self.status = CaseStatus::Decided;
                self.decided_at = Some(Utc::now());
                Ok(())
            }
            other => Err(self.bad_transition(other, CaseStatus::Decided)),
        }
    }

    /// Give up on the current trial attempt (`IN_TRIAL -> PENDING`).
    ///
    /// Used when the tally came back insufficient. Recorded outcomes stay
    /// on the case for audit; the registry archives the abandoned case and
    /// a later request opens a fresh one.
    pub fn abandon_trial(&mut self) -> Result<(), DomainError> {
        match self.status {
            CaseStatus::InTrial => {
                self.status = CaseStatus::Pending;
                Ok(())
            }
            other => Err(self.bad_transition(other, CaseStatus::Pending)),
        }
    }

    /// Invalidate a decided case (`DECIDED -> STALE`).
    pub fn mark_stale(&mut self) -> Result<(), DomainError> {
        match self.status {
            CaseStatus::Decided => {
                self.status = CaseStatus::Stale;
                Ok(())
            }
            other => Err(self.bad_transition(other, CaseStatus::Stale)),
        }
    }

    /// Attach the feedback view for this case's fingerprint.
    pub fn with_feedback(mut self, feedback: Vec<FeedbackSubmission>) -> Self {
        self.feedback = feedback;
        self
    }

    fn bad_transition(&self, from: CaseStatus, to: CaseStatus) -> DomainError {
        DomainError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
