//! In-memory case registry with per-fingerprint coalescing
//!
//! The registry is the single mutable shared resource of the system, so
//! its locking is deliberately two-tiered: a briefly-held map lock hands
//! out per-fingerprint slots, and every state transition happens under
//! that slot's own async mutex. Trials for unrelated fingerprints never
//! serialize against each other.
//!
//! Followers of an in-flight trial subscribe to a `watch` channel kept in
//! the slot; the leader publishes the conclusion exactly once when it
//! records or abandons the trial. A leader that vanishes without
//! concluding drops the sender, which followers observe as an abandoned
//! trial.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, watch};
use tracing::{debug, error, info};
use tribunal_application::ports::case_registry::{
    CaseRegistry, RegistryError, TrialAdmission, TrialConclusion, TrialUpdate, TrialWaiter,
};
use tribunal_domain::{Case, Fingerprint, JurorOutcome, Verdict};

/// Per-fingerprint state guarded by its own async mutex.
#[derive(Default)]
struct CaseSlot {
    /// The live case version, if any.
    current: Option<Case>,
    /// Superseded case versions, append-only, oldest first.
    history: Vec<Case>,
    /// Publisher for the in-flight trial; present only while IN_TRIAL.
    trial: Option<watch::Sender<TrialUpdate>>,
}

impl CaseSlot {
    /// Archive the current case version (stale or abandoned attempts).
    fn archive_current(&mut self) {
        if let Some(case) = self.current.take() {
            self.history.push(case);
        }
    }
}

/// In-memory [`CaseRegistry`] implementation.
#[derive(Default)]
pub struct InMemoryCaseRegistry {
    slots: Mutex<HashMap<Fingerprint, Arc<AsyncMutex<CaseSlot>>>>,
}

impl InMemoryCaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or create the slot for a fingerprint. The map lock is held
    /// only long enough to clone the slot handle.
    fn slot(&self, fingerprint: &Fingerprint) -> Result<Arc<AsyncMutex<CaseSlot>>, RegistryError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| RegistryError::Unavailable(format!("registry map poisoned: {}", e)))?;
        Ok(Arc::clone(
            slots.entry(fingerprint.clone()).or_default(),
        ))
    }

    /// Number of archived case versions for a fingerprint (for tests and
    /// diagnostics).
    pub async fn history_len(&self, fingerprint: &Fingerprint) -> usize {
        match self.slot(fingerprint) {
            Ok(slot) => slot.lock().await.history.len(),
            Err(_) => 0,
        }
    }
}

#[async_trait]
impl CaseRegistry for InMemoryCaseRegistry {
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<Case>, RegistryError> {
        let slot = self.slot(fingerprint)?;
        let guard = slot.lock().await;
        Ok(guard.current.clone())
    }

    async fn begin_trial(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<TrialAdmission, RegistryError> {
        let slot = self.slot(fingerprint)?;
        let mut guard = slot.lock().await;

        if let Some(case) = &guard.current {
            if case.is_decided() {
                return Ok(TrialAdmission::Decided(case.clone()));
            }
            if case.in_trial() {
                if let Some(sender) = &guard.trial {
                    debug!(
                        fingerprint = fingerprint.short(),
                        "Coalescing onto in-flight trial"
                    );
                    return Ok(TrialAdmission::Follower(TrialWaiter::new(
                        sender.subscribe(),
                    )));
                }
                // Leader vanished without concluding; archive the husk
                // and let this caller lead a fresh trial.
                guard.archive_current();
            } else {
                // Stale or abandoned-pending version: supersede it.
                guard.archive_current();
            }
        }

        let case = Case::open_trial(fingerprint.clone());
        let (sender, _receiver) = watch::channel(TrialUpdate::InFlight);
        guard.current = Some(case.clone());
        guard.trial = Some(sender);

        info!(fingerprint = fingerprint.short(), "Trial opened");
        Ok(TrialAdmission::Leader(case))
    }

    async fn append_outcomes(
        &self,
        fingerprint: &Fingerprint,
        outcomes: Vec<JurorOutcome>,
    ) -> Result<(), RegistryError> {
        let slot = self.slot(fingerprint)?;
        let mut guard = slot.lock().await;

        match guard.current.as_mut() {
            Some(case) if case.in_trial() => {
                case.append_outcomes(outcomes);
                Ok(())
            }
            _ => Err(RegistryError::NotInTrial(fingerprint.clone())),
        }
    }

    async fn record_verdict(
        &self,
        fingerprint: &Fingerprint,
        verdict: Verdict,
    ) -> Result<Case, RegistryError> {
        let slot = self.slot(fingerprint)?;
        let mut guard = slot.lock().await;

        let Some(case) = guard.current.as_mut() else {
            return Err(RegistryError::NotFound(fingerprint.clone()));
        };

        if case.is_decided() {
            // Idempotent for an equal verdict; anything else is a
            // coalescing bug upstream.
            if case.verdict.as_ref() == Some(&verdict) {
                return Ok(case.clone());
            }
            error!(
                fingerprint = fingerprint.short(),
                "Conflicting verdict write for decided case"
            );
            return Err(RegistryError::Conflict(fingerprint.clone()));
        }

        if !case.in_trial() {
            return Err(RegistryError::NotInTrial(fingerprint.clone()));
        }

        case.decide(verdict)
            .map_err(|_| RegistryError::NotInTrial(fingerprint.clone()))?;
        let decided = case.clone();

        if let Some(sender) = guard.trial.take() {
            let _ = sender.send(TrialUpdate::Concluded(TrialConclusion::Decided(
                decided.clone(),
            )));
        }

        Ok(decided)
    }

    async fn abandon_trial(&self, fingerprint: &Fingerprint) -> Result<(), RegistryError> {
        let slot = self.slot(fingerprint)?;
        let mut guard = slot.lock().await;

        match guard.current.as_mut() {
            Some(case) if case.in_trial() => {
                case.abandon_trial()
                    .map_err(|_| RegistryError::NotInTrial(fingerprint.clone()))?;
                guard.archive_current();
                if let Some(sender) = guard.trial.take() {
                    let _ = sender.send(TrialUpdate::Concluded(TrialConclusion::Abandoned));
                }
                info!(fingerprint = fingerprint.short(), "Trial abandoned");
                Ok(())
            }
            // Already concluded or never started: nothing to release.
            _ => Ok(()),
        }
    }

    async fn invalidate(&self, fingerprint: &Fingerprint) -> Result<(), RegistryError> {
        let slot = self.slot(fingerprint)?;
        let mut guard = slot.lock().await;

        match guard.current.as_mut() {
            Some(case) if case.is_decided() => {
                case.mark_stale()
                    .map_err(|_| RegistryError::NotFound(fingerprint.clone()))?;
                info!(fingerprint = fingerprint.short(), "Case invalidated");
                Ok(())
            }
            // No decided case: nothing to invalidate.
            _ => Ok(()),
        }
    }
}
