//! Infrastructure layer for tribunal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer:
//!
//! - [`registry`] - in-memory case registry with per-fingerprint
//!   coalescing
//! - [`feedback`] - in-memory feedback store
//! - [`jurors`] - juror capability adapters (scripted, and HTTP behind
//!   the `http-jurors` feature)
//! - [`config`] - TOML configuration loading and merging
//! - [`authority`] - staff-list review authority
//! - [`audit`] - JSONL verdict audit log

pub mod audit;
pub mod authority;
pub mod config;
pub mod feedback;
pub mod jurors;
pub mod registry;

// Re-export main adapters
pub use audit::jsonl::JsonlAuditLog;
pub use authority::StaffList;
pub use config::{ConfigLoader, FileConfig, JurorEntry};
pub use feedback::in_memory::InMemoryFeedbackStore;
#[cfg(feature = "http-jurors")]
pub use jurors::http::HttpJuror;
pub use jurors::scripted::ScriptedJuror;
pub use registry::in_memory::InMemoryCaseRegistry;
