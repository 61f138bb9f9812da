//! Juror domain
//!
//! A juror is an independent automated judgment source. The domain only
//! knows a juror's identity, its optional weighted role, and the decisions
//! it returns - how a juror reaches a decision is an infrastructure
//! concern behind the `JurorCapability` port.

pub mod decision;
pub mod outcome;
pub mod role;

pub use decision::JurorDecision;
pub use outcome::JurorOutcome;
pub use role::WeightedRole;
