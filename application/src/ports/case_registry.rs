//! Case registry port
//!
//! The registry is the single mutable shared resource in the system: a
//! durable mapping from fingerprint to case state. All transitions must be
//! atomic with respect to the fingerprint key, and `begin_trial` must
//! guarantee at most one concurrent trial per fingerprint - a second
//! caller is admitted as a *follower* and handed the in-flight trial's
//! eventual conclusion instead of starting a duplicate.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;
use tribunal_domain::{Case, Fingerprint, JurorOutcome, Verdict};

/// Errors from registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A differing verdict was written for a trial already decided.
    /// If this ever fires it indicates a coalescing bug upstream.
    #[error("Conflicting verdict write for case {0}")]
    Conflict(Fingerprint),

    #[error("Case {0} is not in trial")]
    NotInTrial(Fingerprint),

    #[error("Case not found: {0}")]
    NotFound(Fingerprint),

    #[error("Registry unavailable: {0}")]
    Unavailable(String),
}

/// Broadcast state of an in-flight trial, published to followers.
#[derive(Debug, Clone, Default)]
pub enum TrialUpdate {
    /// The leader is still collecting outcomes.
    #[default]
    InFlight,
    /// The trial concluded.
    Concluded(TrialConclusion),
}

/// How an in-flight trial ended.
#[derive(Debug, Clone)]
pub enum TrialConclusion {
    /// A verdict was recorded; the decided case is attached.
    Decided(Case),
    /// The trial was abandoned (insufficient decided outcomes or leader
    /// failure). Callers treat this as "not yet judged".
    Abandoned,
}

/// A follower's handle on an in-flight trial.
#[derive(Debug)]
pub struct TrialWaiter {
    receiver: watch::Receiver<TrialUpdate>,
}

impl TrialWaiter {
    pub fn new(receiver: watch::Receiver<TrialUpdate>) -> Self {
        Self { receiver }
    }

    /// Suspend until the trial concludes.
    ///
    /// A leader that disappears without concluding (sender dropped) counts
    /// as an abandoned trial.
    pub async fn conclusion(mut self) -> TrialConclusion {
        loop {
            if let TrialUpdate::Concluded(conclusion) = &*self.receiver.borrow_and_update() {
                return conclusion.clone();
            }
            if self.receiver.changed().await.is_err() {
                return TrialConclusion::Abandoned;
            }
        }
    }
}

/// Admission decision for a trial request.
#[derive(Debug)]
pub enum TrialAdmission {
    /// This caller owns the new trial and must conclude it with
    /// `record_verdict` or `abandon_trial`.
    Leader(Case),
    /// Another caller's trial is in flight; await its conclusion.
    Follower(TrialWaiter),
    /// A decided case already exists; no trial is needed.
    Decided(Case),
}

/// Durable per-fingerprint case store with per-key atomic transitions.
#[async_trait]
pub trait CaseRegistry: Send + Sync {
    /// Fetch the current case for a fingerprint, if any.
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<Case>, RegistryError>;

    /// Request a trial for a fingerprint.
    ///
    /// Guarantees at most one concurrent trial per fingerprint: callers
    /// racing an in-flight trial are admitted as followers. A stale or
    /// abandoned current case is archived and a fresh case version opened.
    async fn begin_trial(&self, fingerprint: &Fingerprint) -> Result<TrialAdmission, RegistryError>;

    /// Append the outcome set collected by the juror pool to the case in
    /// trial. Append-only; outcomes are never removed.
    async fn append_outcomes(
        &self,
        fingerprint: &Fingerprint,
        outcomes: Vec<JurorOutcome>,
    ) -> Result<(), RegistryError>;

    /// Conclude the in-flight trial with a verdict and publish it to
    /// followers. Idempotent for an equal verdict; a differing verdict for
    /// the same trial fails with [`RegistryError::Conflict`].
    async fn record_verdict(
        &self,
        fingerprint: &Fingerprint,
        verdict: Verdict,
    ) -> Result<Case, RegistryError>;

    /// Conclude the in-flight trial without a verdict. Followers are
    /// released with [`TrialConclusion::Abandoned`]; the attempt is
    /// archived for audit and the fingerprint becomes retriable.
    async fn abandon_trial(&self, fingerprint: &Fingerprint) -> Result<(), RegistryError>;

    /// Mark a decided case stale so the next lookup starts a fresh trial.
    /// A no-op when there is no decided case for the fingerprint.
    async fn invalidate(&self, fingerprint: &Fingerprint) -> Result<(), RegistryError>;
}
