//! Trial parameters - dispatch and tally control.
//!
//! [`TrialParams`] groups the static parameters that control a trial:
//! quorum, per-juror timeout, and the content cap shared with the
//! fingerprinter. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tribunal_domain::{Fingerprinter, TallyRule};

/// Static parameters controlling juror dispatch and the tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialParams {
    /// Minimum decided (non-abstain) outcomes required for a verdict.
    pub quorum: usize,
    /// Timeout applied to each individual juror call. Dispatch is
    /// parallel, so this bounds total trial latency.
    pub juror_timeout: Duration,
    /// Content cap, in characters, for fingerprinting and judgment.
    pub max_content_chars: usize,
}

impl Default for TrialParams {
    fn default() -> Self {
        Self {
            quorum: TallyRule::DEFAULT_QUORUM,
            juror_timeout: Duration::from_secs(30),
            max_content_chars: 12_000,
        }
    }
}

impl TrialParams {
    // ==================== Builder Methods ====================

    pub fn with_quorum(mut self, quorum: usize) -> Self {
        self.quorum = quorum;
        self
    }

    pub fn with_juror_timeout(mut self, timeout: Duration) -> Self {
        self.juror_timeout = timeout;
        self
    }

    pub fn with_max_content_chars(mut self, max: usize) -> Self {
        self.max_content_chars = max;
        self
    }

    // ==================== Derived Components ====================

    pub fn tally_rule(&self) -> TallyRule {
        TallyRule::new(self.quorum)
    }

    pub fn fingerprinter(&self) -> Fingerprinter {
        Fingerprinter::new(self.max_content_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = TrialParams::default();
        assert_eq!(params.quorum, 3);
        assert_eq!(params.juror_timeout, Duration::from_secs(30));
        assert_eq!(params.max_content_chars, 12_000);
    }

    #[test]
    fn test_builders() {
        let params = TrialParams::default()
            .with_quorum(2)
            .with_juror_timeout(Duration::from_secs(5))
            .with_max_content_chars(100);
        assert_eq!(params.tally_rule(), TallyRule::new(2));
        assert_eq!(params.fingerprinter().max_content_chars, 100);
    }
}
