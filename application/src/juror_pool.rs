//! Juror pool - parallel dispatch with a fan-in barrier
//!
//! Sends the same judgment request to every configured juror concurrently
//! and collects one outcome per juror. Each call is bounded by a per-call
//! timeout; a timeout or juror-side failure is recorded as an `abstain`
//! outcome and never aborts the trial. The pool waits for the whole bench
//! before returning - the tally needs the complete outcome set to evaluate
//! quorum - so trial latency is roughly the slowest juror, not the sum.

use crate::ports::juror::JurorCapability;
use crate::ports::observer::TrialObserver;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use tribunal_domain::{Fingerprint, JurorOutcome};

/// A fixed bench of juror capabilities.
pub struct JurorPool {
    jurors: Vec<Arc<dyn JurorCapability>>,
    per_call_timeout: Duration,
}

impl JurorPool {
    pub fn new(jurors: Vec<Arc<dyn JurorCapability>>, per_call_timeout: Duration) -> Self {
        Self {
            jurors,
            per_call_timeout,
        }
    }

    pub fn len(&self) -> usize {
        self.jurors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jurors.is_empty()
    }

    /// Dispatch one judgment request to the whole bench.
    ///
    /// Returns exactly one outcome per configured juror, in bench order.
    pub async fn dispatch(
        &self,
        fingerprint: &Fingerprint,
        content: &str,
        observer: &dyn TrialObserver,
    ) -> Vec<JurorOutcome> {
        info!(
            fingerprint = fingerprint.short(),
            jurors = self.jurors.len(),
            "Dispatching trial to bench"
        );

        let mut join_set = JoinSet::new();

        for (index, juror) in self.jurors.iter().enumerate() {
            let juror = Arc::clone(juror);
            let content = content.to_string();
            let per_call_timeout = self.per_call_timeout;

            join_set.spawn(async move {
                let outcome = match timeout(per_call_timeout, juror.judge(&content)).await {
                    Ok(Ok(decision)) => JurorOutcome::decided(juror.id(), decision),
                    Ok(Err(e)) => {
                        warn!(juror = juror.id(), "Juror failed: {}", e);
                        JurorOutcome::abstained(juror.id(), e.to_string())
                    }
                    Err(_) => {
                        warn!(
                            juror = juror.id(),
                            "Juror timed out after {:?}", per_call_timeout
                        );
                        JurorOutcome::abstained(
                            juror.id(),
                            format!("timed out after {:?}", per_call_timeout),
                        )
                    }
                };
                (index, outcome.with_role(juror.role()))
            });
        }

        let mut collected: Vec<Option<JurorOutcome>> = vec![None; self.jurors.len()];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, outcome)) => {
                    debug!(
                        juror = %outcome.juror_id,
                        decision = %outcome.decision,
                        "Juror responded"
                    );
                    observer.on_juror_outcome(&outcome);
                    collected[index] = Some(outcome);
                }
                Err(e) => {
                    // The slot is filled with an abstention below.
                    warn!("Juror task join error: {}", e);
                }
            }
        }

        collected
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    let juror = &self.jurors[index];
                    JurorOutcome::abstained(juror.id(), "juror task failed")
                        .with_role(juror.role())
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::juror::{JurorError, JurorCapability};
    use crate::ports::observer::NoObserver;
    use async_trait::async_trait;
    use tribunal_domain::{Fingerprinter, JurorDecision, WeightedRole};

    struct FixedJuror {
        id: String,
        role: Option<WeightedRole>,
        reply: Result<JurorDecision, JurorError>,
        delay: Duration,
    }

    impl FixedJuror {
        fn new(id: &str, decision: JurorDecision) -> Self {
            Self {
                id: id.to_string(),
                role: None,
                reply: Ok(decision),
                delay: Duration::ZERO,
            }
        }

        fn failing(id: &str) -> Self {
            Self {
                id: id.to_string(),
                role: None,
                reply: Err(JurorError::ConnectionError("refused".into())),
                delay: Duration::ZERO,
            }
        }

        fn slow(id: &str, delay: Duration) -> Self {
            Self {
                id: id.to_string(),
                role: None,
                reply: Ok(JurorDecision::NoObjection),
                delay,
            }
        }
    }

    #[async_trait]
    impl JurorCapability for FixedJuror {
        fn id(&self) -> &str {
            &self.id
        }

        fn role(&self) -> Option<WeightedRole> {
            self.role
        }

        async fn judge(&self, _content: &str) -> Result<JurorDecision, JurorError> {
            tokio::time::sleep(self.delay).await;
            match &self.reply {
                Ok(decision) => Ok(*decision),
                Err(_) => Err(JurorError::ConnectionError("refused".into())),
            }
        }
    }

    fn fp() -> Fingerprint {
        Fingerprinter::default().fingerprint("content under trial")
    }

    #[tokio::test]
    async fn test_dispatch_returns_bench_order() {
        let pool = JurorPool::new(
            vec![
                Arc::new(FixedJuror::slow("slow", Duration::from_millis(50))),
                Arc::new(FixedJuror::new("fast", JurorDecision::SuspiciousFact)),
            ],
            Duration::from_secs(5),
        );

        let outcomes = pool.dispatch(&fp(), "text", &NoObserver).await;
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].juror_id, "slow");
        assert_eq!(outcomes[1].juror_id, "fast");
    }

    #[tokio::test]
    async fn test_failure_becomes_abstain() {
        let pool = JurorPool::new(
            vec![
                Arc::new(FixedJuror::new("ok", JurorDecision::NoObjection)),
                Arc::new(FixedJuror::failing("down")),
            ],
            Duration::from_secs(5),
        );

        let outcomes = pool.dispatch(&fp(), "text", &NoObserver).await;
        assert_eq!(outcomes[0].decision, JurorDecision::NoObjection);
        assert_eq!(outcomes[1].decision, JurorDecision::Abstain);
        assert!(outcomes[1].error.as_deref().unwrap().contains("refused"));
    }

    #[tokio::test]
    async fn test_timeout_becomes_abstain() {
        let pool = JurorPool::new(
            vec![
                Arc::new(FixedJuror::new("ok", JurorDecision::NoObjection)),
                Arc::new(FixedJuror::slow("stuck", Duration::from_secs(60))),
            ],
            Duration::from_millis(20),
        );

        let outcomes = pool.dispatch(&fp(), "text", &NoObserver).await;
        assert_eq!(outcomes[1].decision, JurorDecision::Abstain);
        assert!(outcomes[1].error.as_deref().unwrap().contains("timed out"));
    }
}
