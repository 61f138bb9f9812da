//! Scripted juror - deterministic canned decisions
//!
//! Used for offline operation and tests. Decisions are consumed from a
//! script front to back; once the script runs dry the last decision
//! repeats, so a bench keeps answering across re-trials. An invocation
//! counter backs the single-dispatch (coalescing) assertions in tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tribunal_application::ports::juror::{JurorCapability, JurorError};
use tribunal_domain::{JurorDecision, WeightedRole};

/// A juror that replays a canned decision sequence.
pub struct ScriptedJuror {
    id: String,
    role: Option<WeightedRole>,
    script: Mutex<VecDeque<JurorDecision>>,
    fallback: JurorDecision,
    calls: AtomicUsize,
}

impl ScriptedJuror {
    /// Create a juror replaying `script` in order, repeating the final
    /// decision once the script is exhausted. An empty script abstains.
    pub fn new(id: impl Into<String>, script: Vec<JurorDecision>) -> Self {
        let fallback = script.last().copied().unwrap_or(JurorDecision::Abstain);
        Self {
            id: id.into(),
            role: None,
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    /// A juror that always returns the same decision.
    pub fn always(id: impl Into<String>, decision: JurorDecision) -> Self {
        Self::new(id, vec![decision])
    }

    pub fn with_role(mut self, role: Option<WeightedRole>) -> Self {
        self.role = role;
        self
    }

    /// How many times this juror has been asked to judge.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JurorCapability for ScriptedJuror {
    fn id(&self) -> &str {
        &self.id
    }

    fn role(&self) -> Option<WeightedRole> {
        self.role
    }

    async fn judge(&self, _content: &str) -> Result<JurorDecision, JurorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self
            .script
            .lock()
            .map_err(|e| JurorError::Other(format!("script poisoned: {}", e)))?;
        Ok(script.pop_front().unwrap_or(self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_script_then_repeats_last() {
        let juror = ScriptedJuror::new(
            "logic",
            vec![JurorDecision::SuspiciousFact, JurorDecision::NoObjection],
        );

        assert_eq!(juror.judge("x").await.unwrap(), JurorDecision::SuspiciousFact);
        assert_eq!(juror.judge("x").await.unwrap(), JurorDecision::NoObjection);
        assert_eq!(juror.judge("x").await.unwrap(), JurorDecision::NoObjection);
        assert_eq!(juror.calls(), 3);
    }

    #[tokio::test]
    async fn test_empty_script_abstains() {
        let juror = ScriptedJuror::new("mute", vec![]);
        assert_eq!(juror.judge("x").await.unwrap(), JurorDecision::Abstain);
    }

    #[tokio::test]
    async fn test_role_tag() {
        let juror = ScriptedJuror::always("rag", JurorDecision::NoObjection)
            .with_role(Some(WeightedRole::Archivist));
        assert_eq!(juror.role(), Some(WeightedRole::Archivist));
    }
}
