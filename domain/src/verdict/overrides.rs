//! Weighted-role override rule
//!
//! Recomputes a case's *effective* classification from the base verdict
//! and the weighted-role outcomes of the same trial. The rule is
//! deliberately one-directional: the Archivist and Community Watch roles
//! can jointly clear content the rest of the bench doubted, but no role
//! can raise severity. The base verdict is never touched - the effective
//! classification lives beside it, preserving audit history.

use crate::juror::decision::JurorDecision;
use crate::juror::outcome::JurorOutcome;
use crate::juror::role::WeightedRole;
use crate::verdict::classification::{Classification, Verdict};

/// The downgrade-only override rule.
pub struct OverridePolicy;

impl OverridePolicy {
    /// Compute the effective classification for a decided trial.
    ///
    /// Returns CLEAN when the base verdict is non-CLEAN but every
    /// weighted-role juror on the bench returned `no_objection` and both
    /// roles are present among the outcomes. In every other situation the
    /// effective classification equals the base classification.
    ///
    /// Accepted feedback participates indirectly: accepting a submission
    /// invalidates the case, and the fresh trial's weighted-role outcomes
    /// (which incorporate the feedback record) are what this rule reads.
    pub fn effective(base: &Verdict, outcomes: &[JurorOutcome]) -> Classification {
        if base.is_clean() {
            return base.classification;
        }

        let all_roles_clear = WeightedRole::ALL
            .iter()
            .all(|role| Self::role_clears(outcomes, *role));

        if all_roles_clear {
            Classification::Clean
        } else {
            base.classification
        }
    }

    /// Whether every outcome from jurors holding `role` is `no_objection`,
    /// with at least one such outcome present.
    fn role_clears(outcomes: &[JurorOutcome], role: WeightedRole) -> bool {
        let mut seen = false;
        for outcome in outcomes.iter().filter(|o| o.role == Some(role)) {
            if outcome.decision != JurorDecision::NoObjection {
                return false;
            }
            seen = true;
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(decision: JurorDecision, role: WeightedRole) -> JurorOutcome {
        JurorOutcome::decided(role.as_str(), decision).with_role(Some(role))
    }

    fn suspicious_base() -> Verdict {
        Verdict::new(Classification::Suspicious, 1, 4)
    }

    #[test]
    fn test_both_roles_clear_downgrades_to_clean() {
        let outcomes = vec![
            JurorOutcome::decided("logic", JurorDecision::SuspiciousFact),
            weighted(JurorDecision::NoObjection, WeightedRole::Archivist),
            weighted(JurorDecision::NoObjection, WeightedRole::CommunityWatch),
        ];
        assert_eq!(
            OverridePolicy::effective(&suspicious_base(), &outcomes),
            Classification::Clean
        );
    }

    #[test]
    fn test_one_role_objecting_blocks_override() {
        let outcomes = vec![
            weighted(JurorDecision::NoObjection, WeightedRole::Archivist),
            weighted(JurorDecision::SuspiciousFact, WeightedRole::CommunityWatch),
        ];
        assert_eq!(
            OverridePolicy::effective(&suspicious_base(), &outcomes),
            Classification::Suspicious
        );
    }

    #[test]
    fn test_missing_role_blocks_override() {
        let outcomes = vec![weighted(JurorDecision::NoObjection, WeightedRole::Archivist)];
        assert_eq!(
            OverridePolicy::effective(&suspicious_base(), &outcomes),
            Classification::Suspicious
        );
    }

    #[test]
    fn test_abstaining_role_blocks_override() {
        let outcomes = vec![
            weighted(JurorDecision::NoObjection, WeightedRole::Archivist),
            JurorOutcome::abstained("community", "timeout")
                .with_role(Some(WeightedRole::CommunityWatch)),
        ];
        assert_eq!(
            OverridePolicy::effective(&suspicious_base(), &outcomes),
            Classification::Suspicious
        );
    }

    #[test]
    fn test_clean_base_never_changes() {
        // Monotonicity: CLEAN stays CLEAN whatever the weighted roles say.
        let base = Verdict::new(Classification::Clean, 0, 5);
        let outcomes = vec![
            weighted(JurorDecision::ReasonableDoubt, WeightedRole::Archivist),
            weighted(JurorDecision::ReasonableDoubt, WeightedRole::CommunityWatch),
        ];
        assert_eq!(
            OverridePolicy::effective(&base, &outcomes),
            Classification::Clean
        );
    }

    #[test]
    fn test_refuted_base_can_downgrade() {
        let base = Verdict::new(Classification::Refuted, 3, 5);
        let outcomes = vec![
            JurorOutcome::decided("logic", JurorDecision::ReasonableDoubt),
            JurorOutcome::decided("skeptic", JurorDecision::ReasonableDoubt),
            JurorOutcome::decided("web", JurorDecision::ReasonableDoubt),
            weighted(JurorDecision::NoObjection, WeightedRole::Archivist),
            weighted(JurorDecision::NoObjection, WeightedRole::CommunityWatch),
        ];
        assert_eq!(
            OverridePolicy::effective(&base, &outcomes),
            Classification::Clean
        );
    }

    #[test]
    fn test_no_weighted_jurors_on_bench() {
        let outcomes = vec![
            JurorOutcome::decided("logic", JurorDecision::SuspiciousFact),
            JurorOutcome::decided("skeptic", JurorDecision::NoObjection),
        ];
        assert_eq!(
            OverridePolicy::effective(&suspicious_base(), &outcomes),
            Classification::Suspicious
        );
    }
}
