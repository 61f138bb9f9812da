//! Verdict and classification types

use serde::{Deserialize, Serialize};

/// The three-way trust classification of a unit of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// No decided juror objected.
    Clean,
    /// One or two decided jurors objected.
    Suspicious,
    /// Three or more decided jurors objected.
    Refuted,
}

impl Classification {
    pub fn is_clean(&self) -> bool {
        matches!(self, Classification::Clean)
    }

    /// Stable wire name of this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Clean => "clean",
            Classification::Suspicious => "suspicious",
            Classification::Refuted => "refuted",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Clean => write!(f, "CLEAN"),
            Classification::Suspicious => write!(f, "SUSPICIOUS"),
            Classification::Refuted => write!(f, "REFUTED"),
        }
    }
}

/// The result of tallying one trial's outcomes.
///
/// Derived, never mutated: a re-trial produces a new `Verdict`, not a
/// patch of an old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The trust classification.
    pub classification: Classification,
    /// Number of decided outcomes that objected.
    pub objection_count: usize,
    /// Number of non-abstain outcomes the tally was computed from.
    pub decided_from: usize,
}

impl Verdict {
    pub fn new(classification: Classification, objection_count: usize, decided_from: usize) -> Self {
        Self {
            classification,
            objection_count,
            decided_from,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.classification.is_clean()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} objections of {} decided)",
            self.classification, self.objection_count, self.decided_from
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Clean.to_string(), "CLEAN");
        assert_eq!(Classification::Suspicious.to_string(), "SUSPICIOUS");
        assert_eq!(Classification::Refuted.to_string(), "REFUTED");
    }

    #[test]
    fn test_verdict_equality() {
        let a = Verdict::new(Classification::Suspicious, 1, 4);
        let b = Verdict::new(Classification::Suspicious, 1, 4);
        let c = Verdict::new(Classification::Refuted, 3, 5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_verdict_display() {
        let verdict = Verdict::new(Classification::Suspicious, 1, 4);
        assert_eq!(verdict.to_string(), "SUSPICIOUS (1 objections of 4 decided)");
    }
}
