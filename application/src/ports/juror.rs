//! Juror capability port
//!
//! Defines the interface for individual judgment services. How a juror
//! reaches its decision is a black box: the pool only sees one of the four
//! fixed decisions, or a failure that it records as an abstention.

use async_trait::async_trait;
use thiserror::Error;
use tribunal_domain::{JurorDecision, WeightedRole};

/// Errors a juror call can produce.
///
/// None of these abort a trial; the pool maps every variant to an
/// `abstain` outcome carrying the error text.
#[derive(Error, Debug)]
pub enum JurorError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// An independent automated judgment source.
///
/// Implementations (adapters) live in the infrastructure layer. New juror
/// types - including weighted roles - are added by registering additional
/// capability instances with the pool; nothing branches on juror identity.
#[async_trait]
pub trait JurorCapability: Send + Sync {
    /// Stable identity of this juror, recorded on every outcome.
    fn id(&self) -> &str;

    /// Override authority of this juror, if any.
    fn role(&self) -> Option<WeightedRole> {
        None
    }

    /// Judge one unit of content.
    async fn judge(&self, content: &str) -> Result<JurorDecision, JurorError>;
}
