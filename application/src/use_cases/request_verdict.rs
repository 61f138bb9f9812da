//! Request Verdict use case - the verdict facade
//!
//! The single entry point external callers use to obtain a verdict for a
//! unit of content. Per fingerprint the flow is a state machine:
//! `NOT_JUDGED -> TRIAL_IN_PROGRESS -> DECIDED [-> STALE -> ...]`. A
//! decided case short-circuits to its cached verdict; otherwise the caller
//! either leads a fresh trial or follows an in-flight one (coalescing).

use crate::juror_pool::JurorPool;
use crate::ports::audit_log::{AuditEvent, VerdictAuditLog};
use crate::ports::case_registry::{
    CaseRegistry, RegistryError, TrialAdmission, TrialConclusion,
};
use crate::ports::feedback_store::{FeedbackError, FeedbackStore};
use crate::ports::observer::{NoObserver, TrialObserver};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use tribunal_domain::{
    Case, Classification, Fingerprint, Fingerprinter, JurorOutcome, TallyRule,
};

/// Errors that can surface from a verdict request.
#[derive(Error, Debug)]
pub enum RequestVerdictError {
    #[error("No jurors configured")]
    NoJurors,

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Feedback store error: {0}")]
    Feedback(#[from] FeedbackError),
}

/// A verdict request: raw content, or a fingerprint alone for cache-only
/// queries.
#[derive(Debug, Clone)]
pub enum VerdictQuery {
    Content(String),
    Fingerprint(Fingerprint),
}

/// User-visible judgment state.
///
/// `Pending` covers everything short of a decided case - no case, a trial
/// in flight that was abandoned, an insufficient tally. Callers map it to
/// the least alarming display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Decided,
}

/// The facade's answer to a verdict request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictReport {
    pub fingerprint: Fingerprint,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_classification: Option<Classification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objection_count: Option<usize>,
    /// Per-juror outcomes of the deciding trial (empty while pending).
    #[serde(default)]
    pub juror_outcomes: Vec<JurorOutcome>,
}

impl VerdictReport {
    /// Report for a fingerprint with no decided case.
    pub fn pending(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            status: ReportStatus::Pending,
            classification: None,
            effective_classification: None,
            objection_count: None,
            juror_outcomes: Vec::new(),
        }
    }

    /// Report derived from a decided case.
    pub fn decided(case: Case) -> Self {
        let verdict = case.verdict.as_ref();
        Self {
            fingerprint: case.fingerprint.clone(),
            status: ReportStatus::Decided,
            classification: verdict.map(|v| v.classification),
            effective_classification: case.effective_verdict,
            objection_count: verdict.map(|v| v.objection_count),
            juror_outcomes: case.juror_outcomes,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.status == ReportStatus::Decided
    }
}

/// Use case for requesting a verdict.
pub struct RequestVerdictUseCase<R, F>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    registry: Arc<R>,
    feedback: Arc<F>,
    pool: JurorPool,
    tally: TallyRule,
    fingerprinter: Fingerprinter,
    audit: Arc<dyn VerdictAuditLog>,
}

impl<R, F> RequestVerdictUseCase<R, F>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    pub fn new(
        registry: Arc<R>,
        feedback: Arc<F>,
        pool: JurorPool,
        tally: TallyRule,
        fingerprinter: Fingerprinter,
        audit: Arc<dyn VerdictAuditLog>,
    ) -> Self {
        Self {
            registry,
            feedback,
            pool,
            tally,
            fingerprinter,
            audit,
        }
    }

    /// Execute the use case with default (no-op) progress.
    pub async fn execute(&self, query: VerdictQuery) -> Result<VerdictReport, RequestVerdictError> {
        self.execute_with_observer(query, &NoObserver).await
    }

    /// Execute the use case with progress callbacks.
    pub async fn execute_with_observer(
        &self,
        query: VerdictQuery,
        observer: &dyn TrialObserver,
    ) -> Result<VerdictReport, RequestVerdictError> {
        let (fingerprint, content) = match query {
            VerdictQuery::Content(raw) => {
                let normalized = self.fingerprinter.normalize(&raw);
                (self.fingerprinter.fingerprint(&raw), Some(normalized))
            }
            VerdictQuery::Fingerprint(fp) => (fp, None),
        };

        // Cached verdict short-circuit
        if let Some(case) = self.registry.lookup(&fingerprint).await?
            && case.is_decided()
        {
            debug!(fingerprint = fingerprint.short(), "Cache hit");
            return Ok(VerdictReport::decided(case));
        }

        // Without content there is nothing to put before the bench.
        let Some(content) = content else {
            return Ok(VerdictReport::pending(fingerprint));
        };

        if self.pool.is_empty() {
            return Err(RequestVerdictError::NoJurors);
        }

        match self.registry.begin_trial(&fingerprint).await? {
            TrialAdmission::Decided(case) => Ok(VerdictReport::decided(case)),
            TrialAdmission::Follower(waiter) => {
                debug!(
                    fingerprint = fingerprint.short(),
                    "Joining in-flight trial"
                );
                match waiter.conclusion().await {
                    TrialConclusion::Decided(case) => Ok(VerdictReport::decided(case)),
                    TrialConclusion::Abandoned => Ok(VerdictReport::pending(fingerprint)),
                }
            }
            TrialAdmission::Leader(_) => {
                match self.lead_trial(&fingerprint, &content, observer).await {
                    Ok(report) => Ok(report),
                    Err(e) => {
                        // Release followers before surfacing the error.
                        if let Err(abandon_err) = self.registry.abandon_trial(&fingerprint).await {
                            warn!(
                                fingerprint = fingerprint.short(),
                                "Could not abandon failed trial: {}", abandon_err
                            );
                        }
                        Err(e)
                    }
                }
            }
        }
    }

    /// Fetch the full case file for a fingerprint, with its feedback view
    /// hydrated from the feedback store.
    pub async fn case_file(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<Case>, RequestVerdictError> {
        let Some(case) = self.registry.lookup(fingerprint).await? else {
            return Ok(None);
        };
        let feedback = self.feedback.submissions_for(fingerprint).await?;
        Ok(Some(case.with_feedback(feedback)))
    }

    /// Run the trial this caller leads: dispatch, tally, record, publish.
    async fn lead_trial(
        &self,
        fingerprint: &Fingerprint,
        content: &str,
        observer: &dyn TrialObserver,
    ) -> Result<VerdictReport, RequestVerdictError> {
        observer.on_trial_start(fingerprint, self.pool.len());

        let outcomes = self.pool.dispatch(fingerprint, content, observer).await;
        self.registry
            .append_outcomes(fingerprint, outcomes.clone())
            .await?;

        match self.tally.classify(&outcomes) {
            Ok(verdict) => {
                info!(
                    fingerprint = fingerprint.short(),
                    verdict = %verdict,
                    "Trial decided"
                );
                let case = self.registry.record_verdict(fingerprint, verdict).await?;
                observer.on_trial_concluded(fingerprint, case.verdict.as_ref());
                self.audit.record(AuditEvent::trial_decided(&case));
                Ok(VerdictReport::decided(case))
            }
            Err(insufficient) => {
                warn!(
                    fingerprint = fingerprint.short(),
                    decided = insufficient.decided,
                    quorum = insufficient.quorum,
                    "Trial abandoned: quorum not met"
                );
                self.registry.abandon_trial(fingerprint).await?;
                observer.on_trial_concluded(fingerprint, None);
                self.audit.record(AuditEvent::trial_abandoned(
                    fingerprint,
                    insufficient.decided,
                    insufficient.quorum,
                ));
                Ok(VerdictReport::pending(fingerprint.clone()))
            }
        }
    }
}
