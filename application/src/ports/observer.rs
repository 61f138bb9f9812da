//! Trial observer port
//!
//! Defines the interface for reporting progress during a trial.
//! Implementations live in the presentation layer and can display progress
//! in various ways (console spinner, logs, etc.).

use tribunal_domain::{Fingerprint, JurorOutcome, Verdict};

/// Callback for progress updates during juror dispatch.
pub trait TrialObserver: Send + Sync {
    /// Called when a trial's dispatch starts.
    fn on_trial_start(&self, fingerprint: &Fingerprint, jurors: usize);

    /// Called as each juror's outcome is recorded.
    fn on_juror_outcome(&self, outcome: &JurorOutcome);

    /// Called when the trial concludes. `None` means the tally came back
    /// insufficient and the trial was abandoned.
    fn on_trial_concluded(&self, fingerprint: &Fingerprint, verdict: Option<&Verdict>);
}

/// No-op observer for when progress reporting is not needed.
pub struct NoObserver;

impl TrialObserver for NoObserver {
    fn on_trial_start(&self, _fingerprint: &Fingerprint, _jurors: usize) {}
    fn on_juror_outcome(&self, _outcome: &JurorOutcome) {}
    fn on_trial_concluded(&self, _fingerprint: &Fingerprint, _verdict: Option<&Verdict>) {}
}
