//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    #[error("Invalid case transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Submission has already been reviewed")]
    AlreadyReviewed,

    #[error("Unknown juror decision: {0}")]
    UnknownDecision(String),

    #[error("Unknown weighted role: {0}")]
    UnknownRole(String),

    #[error("Evidence too short: {got} chars (minimum {min})")]
    EvidenceTooShort { got: usize, min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_display() {
        let error = DomainError::InvalidTransition {
            from: "DECIDED".to_string(),
            to: "IN_TRIAL".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid case transition: DECIDED -> IN_TRIAL"
        );
    }

    #[test]
    fn test_evidence_error_display() {
        let error = DomainError::EvidenceTooShort { got: 3, min: 10 };
        assert!(error.to_string().contains("3 chars"));
    }
}
