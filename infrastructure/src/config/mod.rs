//! Configuration file loading for tribunal
//!
//! This module handles file I/O and merging of configuration from
//! multiple sources. The resolved [`FileConfig`] is converted into
//! application-layer types (`TrialParams`, the juror bench, the staff
//! list) at wiring time in the binary.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, JurorEntry, ReviewSection, ServerSection, TrialSection};
pub use loader::ConfigLoader;
