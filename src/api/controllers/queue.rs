//! # Queue Controller
//!
//! Handles the enqueue endpoint: validates the submission, then hands it to
//! the job producer which registers the queue, applies its parallelism and
//! pushes the job into the broker.
use actix_web::HttpResponse;

use crate::{
    jobs::JobProducerTrait,
    models::{ApiError, ApiResponse, EnqueueRequest, EnqueueResponse, ThinDataAppState},
};

/// Validates and enqueues one webhook delivery job.
///
/// # Arguments
///
/// * `request` - The submission to enqueue.
/// * `state` - The application state carrying the job producer.
///
/// # Returns
///
/// The enqueue receipt: the new job id, or a deduplicated marker when an
/// identical identity is still pending.
pub async fn enqueue_job<J>(
    request: EnqueueRequest,
    state: ThinDataAppState<J>,
) -> Result<HttpResponse, ApiError>
where
    J: JobProducerTrait + Send + Sync + 'static,
{
    request.validate()?;

    let receipt = state.job_producer.produce_webhook_job(request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(EnqueueResponse::from(receipt))))
}
