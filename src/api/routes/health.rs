//! Liveness endpoint for the dispatch service.
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// Handles the `/health` endpoint.
///
/// Reports that the HTTP surface is up. Broker connectivity is established at
/// startup, so a live process implies the broker was reachable at boot.
#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy"),
    )
)]
#[get("/health")]
async fn health() -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
