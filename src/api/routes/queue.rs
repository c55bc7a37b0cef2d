//! This module defines the HTTP route for submitting webhook delivery jobs.
//! The route is integrated with the Actix-web framework and delegates to the
//! queue controller.

use crate::{
    api::controllers::queue,
    models::{DefaultAppState, EnqueueRequest},
};
use actix_web::{post, web, Responder};

/// Enqueues one webhook delivery job.
#[utoipa::path(
    post,
    path = "/v1/enqueue",
    tag = "Queue",
    request_body = EnqueueRequest,
    responses(
        (status = 200, description = "Job enqueued or deduplicated"),
        (status = 400, description = "Malformed submission"),
        (status = 500, description = "Broker error"),
    )
)]
#[post("/enqueue")]
async fn enqueue(
    request: web::Json<EnqueueRequest>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    queue::enqueue_job(request.into_inner(), data).await
}

/// Configures the queue routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(enqueue);
}
