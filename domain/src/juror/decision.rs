//! Juror decisions
//!
//! The four fixed decisions a juror can return. `Abstain` is a non-vote:
//! it is recorded for audit but excluded from the quorum denominator.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single juror's decision about a unit of content.
///
/// # Example
///
/// ```
/// use tribunal_domain::JurorDecision;
///
/// let decision: JurorDecision = "reasonable_doubt".parse().unwrap();
/// assert!(decision.is_objection());
/// assert!(!decision.is_abstain());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurorDecision {
    /// The juror found nothing to object to.
    NoObjection,
    /// The juror flagged a specific questionable fact.
    SuspiciousFact,
    /// The juror found grounds to doubt the content as a whole.
    ReasonableDoubt,
    /// The juror could not or would not judge.
    Abstain,
}

impl JurorDecision {
    /// Whether this decision is a non-vote.
    pub fn is_abstain(&self) -> bool {
        matches!(self, JurorDecision::Abstain)
    }

    /// Whether this decision counts as an objection in the tally.
    pub fn is_objection(&self) -> bool {
        matches!(
            self,
            JurorDecision::SuspiciousFact | JurorDecision::ReasonableDoubt
        )
    }

    /// Stable wire name of this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            JurorDecision::NoObjection => "no_objection",
            JurorDecision::SuspiciousFact => "suspicious_fact",
            JurorDecision::ReasonableDoubt => "reasonable_doubt",
            JurorDecision::Abstain => "abstain",
        }
    }
}

impl std::fmt::Display for JurorDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for JurorDecision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no_objection" => Ok(JurorDecision::NoObjection),
            "suspicious_fact" => Ok(JurorDecision::SuspiciousFact),
            "reasonable_doubt" => Ok(JurorDecision::ReasonableDoubt),
            "abstain" => Ok(JurorDecision::Abstain),
            other => Err(DomainError::UnknownDecision(other.to_string())),
        }
    }
}
