//! Case domain - the per-fingerprint trial record.

pub mod entities;

pub use entities::{Case, CaseStatus};
