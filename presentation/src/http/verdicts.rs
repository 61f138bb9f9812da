//! Verdict query endpoints (proxy-facing)

use crate::http::error::ApiError;
use crate::http::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tribunal_application::ports::case_registry::CaseRegistry;
use tribunal_application::ports::feedback_store::FeedbackStore;
use tribunal_application::VerdictQuery;
use tribunal_domain::Fingerprint;

/// Body of `POST /api/v1/verdicts`: raw content, or a fingerprint alone
/// for cache-only queries.
#[derive(Debug, Deserialize)]
pub struct VerdictRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
}

/// `POST /api/v1/verdicts`
pub async fn request_verdict<R, F>(
    state: web::Data<AppState<R, F>>,
    body: web::Json<VerdictRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    let body = body.into_inner();
    let query = match (body.content, body.fingerprint) {
        (Some(content), None) => VerdictQuery::Content(content),
        (None, Some(hex)) => VerdictQuery::Fingerprint(parse_fingerprint(&hex)?),
        _ => {
            return Err(ApiError::BadRequest(
                "provide exactly one of `content` or `fingerprint`".to_string(),
            ));
        }
    };

    let report = state.verdicts.execute(query).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// `GET /api/v1/cases/{fingerprint}` - full case file with its feedback
/// trail, for staff tooling and audit.
pub async fn case_file<R, F>(
    state: web::Data<AppState<R, F>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    let fingerprint = parse_fingerprint(&path.into_inner())?;
    let case = state
        .verdicts
        .case_file(&fingerprint)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("case {}", fingerprint.short())))?;
    Ok(HttpResponse::Ok().json(case))
}

fn parse_fingerprint(hex: &str) -> Result<Fingerprint, ApiError> {
    Fingerprint::from_hex(hex).map_err(|e| ApiError::BadRequest(e.to_string()))
}
