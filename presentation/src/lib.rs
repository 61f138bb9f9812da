//! Presentation layer for tribunal
//!
//! This crate contains the HTTP API surface consumed by the intercepting
//! proxy and the feedback UI, the CLI definitions, console output
//! formatting, and progress reporting for one-shot trials.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{ApiError, AppState};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, TrialProgress};
