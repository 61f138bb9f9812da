//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The application layer depends only on these traits, never on concrete
//! stores, transports, or terminals.

pub mod audit_log;
pub mod case_registry;
pub mod feedback_store;
pub mod juror;
pub mod observer;
pub mod review_authority;
