//! Application layer for tribunal
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It orchestrates the domain (cases, jurors, verdicts)
//! through ports whose adapters live in the infrastructure layer.
//!
//! # Layout
//!
//! - [`ports`] - contracts for the case registry, juror capabilities,
//!   feedback store, review authority, trial observer, and audit log
//! - [`juror_pool`] - parallel juror dispatch with per-call timeouts
//! - [`use_cases`] - the verdict facade, feedback submission and review
//! - [`config`] - trial parameters

pub mod config;
pub mod juror_pool;
pub mod ports;
pub mod use_cases;

// Re-export main types
pub use config::TrialParams;
pub use juror_pool::JurorPool;
pub use ports::{
    audit_log::{AuditEvent, NoAuditLog, VerdictAuditLog},
    case_registry::{
        CaseRegistry, RegistryError, TrialAdmission, TrialConclusion, TrialUpdate, TrialWaiter,
    },
    feedback_store::{FeedbackError, FeedbackStore},
    juror::{JurorCapability, JurorError},
    observer::{NoObserver, TrialObserver},
    review_authority::ReviewAuthority,
};
pub use use_cases::{
    request_verdict::{
        ReportStatus, RequestVerdictError, RequestVerdictUseCase, VerdictQuery, VerdictReport,
    },
    review_feedback::{ReviewFeedbackError, ReviewFeedbackInput, ReviewFeedbackUseCase},
    submit_feedback::{SubmitFeedbackError, SubmitFeedbackInput, SubmitFeedbackUseCase},
};
