//! Progress reporting.

pub mod reporter;

pub use reporter::{SimpleProgress, TrialProgress};
