//! Payload posted to a job's error callback on terminal failure.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::jobs::{Job, WebhookDeliver};

/// JSON body of the error-callback POST.
///
/// `timeout` and `delay` are reported in milliseconds, as stored on the job.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCallback {
    pub error: String,
    pub job_id: String,
    pub queue_name: String,
    pub destination: String,
    pub body: String,
    pub content_type: String,
    pub timeout: u64,
    pub delay: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub deduplication_id: Option<String>,
}

impl ErrorCallback {
    pub fn from_failed_job(job: &Job<WebhookDeliver>, error_message: &str) -> Self {
        Self {
            error: error_message.to_string(),
            job_id: job.message_id.clone(),
            queue_name: job.data.queue_name.clone(),
            destination: job.data.destination.clone(),
            body: job.data.body.clone(),
            content_type: job.data.content_type.clone(),
            timeout: job.data.timeout_ms,
            delay: job.data.delay_ms,
            deduplication_id: job.data.deduplication_id.clone(),
        }
    }
}
