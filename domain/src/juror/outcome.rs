//! Juror outcomes - immutable per-trial vote records.

use crate::juror::decision::JurorDecision;
use crate::juror::role::WeightedRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One juror's recorded outcome for one trial.
///
/// Produced once per juror per trial and never mutated afterwards. A
/// juror-side failure or timeout is recorded as an [`JurorDecision::Abstain`]
/// with the error preserved for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurorOutcome {
    /// Identity of the juror that produced this outcome.
    pub juror_id: String,
    /// Override authority of the juror, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WeightedRole>,
    /// The decision returned (or `abstain` for failures).
    pub decision: JurorDecision,
    /// When the outcome was recorded.
    pub timestamp: DateTime<Utc>,
    /// Error that forced an abstention, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JurorOutcome {
    /// Record a decision the juror actually returned.
    pub fn decided(juror_id: impl Into<String>, decision: JurorDecision) -> Self {
        Self {
            juror_id: juror_id.into(),
            role: None,
            decision,
            timestamp: Utc::now(),
            error: None,
        }
    }

    /// Record a juror failure or timeout as an abstention.
    pub fn abstained(juror_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            juror_id: juror_id.into(),
            role: None,
            decision: JurorDecision::Abstain,
            timestamp: Utc::now(),
            error: Some(error.into()),
        }
    }

    /// Tag this outcome with the juror's weighted role.
    pub fn with_role(mut self, role: Option<WeightedRole>) -> Self {
        self.role = role;
        self
    }

    /// Whether this outcome enters the quorum denominator.
    pub fn is_decided(&self) -> bool {
        !self.decision.is_abstain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decided_outcome() {
        let outcome = JurorOutcome::decided("logic", JurorDecision::NoObjection);
        assert!(outcome.is_decided());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_abstained_outcome_keeps_error() {
        let outcome = JurorOutcome::abstained("web-search", "connect timeout");
        assert!(!outcome.is_decided());
        assert_eq!(outcome.decision, JurorDecision::Abstain);
        assert_eq!(outcome.error.as_deref(), Some("connect timeout"));
    }

    #[test]
    fn test_role_tag() {
        let outcome = JurorOutcome::decided("rag", JurorDecision::NoObjection)
            .with_role(Some(WeightedRole::Archivist));
        assert_eq!(outcome.role, Some(WeightedRole::Archivist));
    }
}
