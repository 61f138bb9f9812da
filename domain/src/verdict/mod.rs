//! Verdict domain
//!
//! This module contains the core concepts for verdict production.
//!
//! # Core Concepts
//!
//! ## Tally
//! A pure vote count over juror outcomes: abstains are excluded, a quorum
//! of decided outcomes gates classification, and the objection count maps
//! onto the three classifications.
//!
//! ## Override
//! A separate, deliberately asymmetric rule: the two weighted juror roles
//! can jointly downgrade a non-CLEAN verdict to CLEAN, and nothing can
//! upgrade severity. The system is designed to resist false positives
//! (marking true content as false) more than false negatives.

pub mod classification;
pub mod overrides;
pub mod tally;

pub use classification::{Classification, Verdict};
pub use overrides::OverridePolicy;
pub use tally::{Insufficient, TallyRule};
