//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//!
//! - [`request_verdict`] - the verdict facade (lookup, coalesce, dispatch,
//!   tally, record, override)
//! - [`submit_feedback`] - end-user evidence submission
//! - [`review_feedback`] - staff review, with invalidation on acceptance

pub mod request_verdict;
pub mod review_feedback;
pub mod submit_feedback;
