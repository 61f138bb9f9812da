//! Unified API error handling
//!
//! This module provides a consistent error response format across all API
//! endpoints, and the mappings from use-case errors onto HTTP statuses.
//! The proxy treats 5xx responses as "not judged" and falls back to the
//! least alarming display state.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tribunal_application::ports::case_registry::RegistryError;
use tribunal_application::ports::feedback_store::FeedbackError;
use tribunal_application::{
    RequestVerdictError, ReviewFeedbackError, SubmitFeedbackError,
};
use tribunal_domain::DomainError;
use uuid::Uuid;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints return `Result<T, ApiError>` for consistent error
/// handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unauthorized review attempt (403)
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflicting write (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Registry or store unavailable (503)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::PermissionDenied(_) => "permission_denied",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Unavailable(_) => "unavailable",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for use-case errors
// ============================================================================

impl From<RequestVerdictError> for ApiError {
    fn from(err: RequestVerdictError) -> Self {
        match err {
            RequestVerdictError::NoJurors => {
                ApiError::Unavailable("no jurors configured".to_string())
            }
            RequestVerdictError::Registry(RegistryError::Unavailable(m)) => ApiError::Unavailable(m),
            RequestVerdictError::Registry(e @ RegistryError::Conflict(_)) => {
                ApiError::Conflict(e.to_string())
            }
            RequestVerdictError::Registry(e) => ApiError::Internal(e.to_string()),
            RequestVerdictError::Feedback(FeedbackError::Unavailable(m)) => {
                ApiError::Unavailable(m)
            }
            RequestVerdictError::Feedback(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SubmitFeedbackError> for ApiError {
    fn from(err: SubmitFeedbackError) -> Self {
        match err {
            SubmitFeedbackError::Invalid(e) => ApiError::BadRequest(e.to_string()),
            SubmitFeedbackError::Store(FeedbackError::Unavailable(m)) => ApiError::Unavailable(m),
            SubmitFeedbackError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ReviewFeedbackError> for ApiError {
    fn from(err: ReviewFeedbackError) -> Self {
        match err {
            ReviewFeedbackError::PermissionDenied(reviewer) => {
                ApiError::PermissionDenied(format!("reviewer {} is not staff", reviewer))
            }
            ReviewFeedbackError::Store(FeedbackError::NotFound(id)) => {
                ApiError::NotFound(format!("submission {}", id))
            }
            ReviewFeedbackError::Store(FeedbackError::Domain(DomainError::AlreadyReviewed)) => {
                ApiError::Conflict("submission has already been reviewed".to_string())
            }
            ReviewFeedbackError::Store(FeedbackError::Unavailable(m)) => ApiError::Unavailable(m),
            ReviewFeedbackError::Store(e) => ApiError::Internal(e.to_string()),
            ReviewFeedbackError::Registry(RegistryError::Unavailable(m)) => {
                ApiError::Unavailable(m)
            }
            ReviewFeedbackError::Registry(e) => ApiError::Internal(e.to_string()),
        }
    }
}
