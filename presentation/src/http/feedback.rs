//! Feedback submission and staff review endpoints

use crate::http::error::ApiError;
use crate::http::state::AppState;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tribunal_application::ports::case_registry::CaseRegistry;
use tribunal_application::ports::feedback_store::FeedbackStore;
use tribunal_application::{ReviewFeedbackInput, SubmitFeedbackInput};
use tribunal_domain::{Fingerprint, ReviewDecision, SubmissionId};

/// Body of `POST /api/v1/feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub fingerprint: String,
    pub submitter: String,
    pub evidence: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub submission_id: SubmissionId,
}

/// `POST /api/v1/feedback` - submit evidence against a case. No immediate
/// verdict change; the submission enters the review queue.
pub async fn submit<R, F>(
    state: web::Data<AppState<R, F>>,
    body: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    let body = body.into_inner();
    let fingerprint = Fingerprint::from_hex(body.fingerprint)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let submission_id = state
        .submit
        .execute(SubmitFeedbackInput {
            fingerprint,
            submitter: body.submitter,
            evidence: body.evidence,
        })
        .await?;

    Ok(HttpResponse::Created().json(FeedbackResponse { submission_id }))
}

/// Body of `POST /api/v1/feedback/{id}/review`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub decision: ReviewDecision,
    pub reviewer: String,
}

/// `POST /api/v1/feedback/{id}/review` - staff-only review. Accepting
/// invalidates the associated case so the next lookup re-tries it.
pub async fn review<R, F>(
    state: web::Data<AppState<R, F>>,
    path: web::Path<String>,
    body: web::Json<ReviewRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    let raw_id = path.into_inner();
    let submission_id = SubmissionId::parse(&raw_id)
        .ok_or_else(|| ApiError::BadRequest(format!("invalid submission id: {}", raw_id)))?;
    let body = body.into_inner();

    let submission = state
        .review
        .execute(ReviewFeedbackInput {
            submission_id,
            decision: body.decision,
            reviewer: body.reviewer,
        })
        .await?;

    Ok(HttpResponse::Ok().json(submission))
}
