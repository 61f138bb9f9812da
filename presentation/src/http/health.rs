//! Health check endpoint for liveness probes

use actix_web::{HttpResponse, Responder, get};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe endpoint
///
/// Always returns 200 OK if the service is running.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
