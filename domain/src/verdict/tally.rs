//! The tally rule - quorum gating and vote counting
//!
//! This is a straightforward deterministic tally; its correctness hinges
//! entirely on accurate quorum gating and consistent exclusion of abstains
//! from the denominator. Classification is a pure function of the decided
//! outcome multiset: reordering outcomes never changes the result.

use crate::juror::outcome::JurorOutcome;
use crate::verdict::classification::{Classification, Verdict};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Too few decided outcomes to produce a verdict.
///
/// Not a failure: callers must treat this as "not yet judged" and fall
/// back to the least alarming visible state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Insufficient decided outcomes: {decided} of {quorum} required")]
pub struct Insufficient {
    /// Decided (non-abstain) outcomes available.
    pub decided: usize,
    /// Minimum decided outcomes required.
    pub quorum: usize,
}

/// The classification rule applied to one trial's outcomes.
///
/// # Example
///
/// ```
/// use tribunal_domain::{JurorDecision, JurorOutcome, TallyRule};
///
/// let outcomes = vec![
///     JurorOutcome::decided("a", JurorDecision::NoObjection),
///     JurorOutcome::decided("b", JurorDecision::SuspiciousFact),
///     JurorOutcome::decided("c", JurorDecision::NoObjection),
///     JurorOutcome::abstained("d", "timeout"),
///     JurorOutcome::decided("e", JurorDecision::NoObjection),
/// ];
///
/// let verdict = TallyRule::default().classify(&outcomes).unwrap();
/// assert_eq!(verdict.decided_from, 4);
/// assert_eq!(verdict.objection_count, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRule {
    /// Minimum decided (non-abstain) outcomes required for a verdict.
    pub quorum: usize,
}

impl Default for TallyRule {
    fn default() -> Self {
        Self {
            quorum: Self::DEFAULT_QUORUM,
        }
    }
}

impl TallyRule {
    /// Default minimum count of non-abstain decisions.
    pub const DEFAULT_QUORUM: usize = 3;

    /// Objection count at which content is considered refuted.
    pub const REFUTED_AT: usize = 3;

    pub fn new(quorum: usize) -> Self {
        Self { quorum }
    }

    /// Tally one trial's outcomes into a verdict.
    ///
    /// Abstains are excluded from the denominator before the quorum gate
    /// is applied. With fewer than `quorum` decided outcomes the tally
    /// returns [`Insufficient`] and no verdict exists.
    pub fn classify(&self, outcomes: &[JurorOutcome]) -> Result<Verdict, Insufficient> {
        let decided: Vec<_> = outcomes.iter().filter(|o| o.is_decided()).collect();

        if decided.len() < self.quorum {
            return Err(Insufficient {
                decided: decided.len(),
                quorum: self.quorum,
            });
        }

        let objection_count = decided.iter().filter(|o| o.decision.is_objection()).count();

        let classification = if objection_count == 0 {
            Classification::Clean
        } else if objection_count < Self::REFUTED_AT {
            Classification::Suspicious
        } else {
            Classification::Refuted
        };

        Ok(Verdict::new(classification, objection_count, decided.len()))
    }
}
