//! HTTP API surface
//!
//! The three exposed APIs plus a liveness probe:
//!
//! - `POST /api/v1/verdicts` - verdict query (proxy-facing)
//! - `GET  /api/v1/cases/{fingerprint}` - full case file with feedback
//! - `POST /api/v1/feedback` - end-user evidence submission
//! - `POST /api/v1/feedback/{id}/review` - staff review
//! - `GET  /health` - liveness probe
//!
//! Handlers are generic over the registry and feedback-store ports; the
//! binary instantiates them with concrete adapters at wiring time.

pub mod error;
pub mod feedback;
pub mod health;
pub mod state;
pub mod verdicts;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use actix_web::web;
use tribunal_application::ports::case_registry::CaseRegistry;
use tribunal_application::ports::feedback_store::FeedbackStore;

/// Register all routes for the given port implementations.
pub fn configure<R, F>(cfg: &mut web::ServiceConfig)
where
    R: CaseRegistry + 'static,
    F: FeedbackStore + 'static,
{
    cfg.service(
        web::resource("/api/v1/verdicts").route(web::post().to(verdicts::request_verdict::<R, F>)),
    )
    .service(
        web::resource("/api/v1/cases/{fingerprint}")
            .route(web::get().to(verdicts::case_file::<R, F>)),
    )
    .service(web::resource("/api/v1/feedback").route(web::post().to(feedback::submit::<R, F>)))
    .service(
        web::resource("/api/v1/feedback/{id}/review")
            .route(web::post().to(feedback::review::<R, F>)),
    )
    .service(health::health);
}
