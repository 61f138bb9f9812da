//! Verdict audit log adapters.

pub mod jsonl;

pub use jsonl::JsonlAuditLog;
