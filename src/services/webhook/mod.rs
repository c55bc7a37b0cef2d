//! Outbound HTTP delivery client for webhook jobs.
//!
//! Owns the shared `reqwest` client used for both delivery attempts and
//! error-callback notifications.
use log::{info, warn};
use reqwest::{header::CONTENT_TYPE, Client};
use thiserror::Error;
use tokio::time::{sleep, timeout, Duration};

use crate::{
    jobs::{Job, WebhookDeliver},
    models::ErrorCallback,
};

/// Failure of a single delivery attempt. Success carries no data, so an
/// attempt outcome is `Result<(), DeliveryError>`: delivered, timed out, or
/// failed in transport.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Default)]
pub struct WebhookDeliveryClient {
    client: Client,
}

impl WebhookDeliveryClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Runs one delivery attempt against the job's destination.
    ///
    /// The job's timeout is used twice, intentionally: the attempt first
    /// sleeps for the full timeout before dispatching, and the POST itself is
    /// then bounded by the same value. Each retry attempt gets a fresh budget.
    ///
    /// Any HTTP response that arrives before the deadline counts as
    /// delivered; the status code and response body are not inspected.
    pub async fn deliver(&self, payload: &WebhookDeliver) -> Result<(), DeliveryError> {
        let budget = Duration::from_millis(payload.timeout_ms);
        sleep(budget).await;

        let send = async {
            let response = self
                .client
                .post(&payload.destination)
                .header(CONTENT_TYPE, payload.content_type.as_str())
                .body(payload.body.clone())
                .send()
                .await?;
            // Read and discard the body so the connection can be reused.
            response.text().await?;
            Ok::<(), reqwest::Error>(())
        };

        match timeout(budget, send).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(DeliveryError::Transport(source)),
            Err(_) => Err(DeliveryError::Timeout {
                timeout_ms: payload.timeout_ms,
            }),
        }
    }

    /// Best-effort failure notification to the job's error callback.
    ///
    /// The outcome is logged and discarded; it never feeds back into the
    /// job's own state.
    pub async fn notify_failure(&self, job: &Job<WebhookDeliver>, error_message: &str) {
        let Some(callback_url) = job.data.error_callback.clone() else {
            return;
        };
        let payload = ErrorCallback::from_failed_job(job, error_message);
        match self.client.post(&callback_url).json(&payload).send().await {
            Ok(_) => info!("Error callback delivered for job {}", job.message_id),
            Err(e) => warn!(
                "Failed to deliver error callback for job {}: {}",
                job.message_id, e
            ),
        }
    }
}
