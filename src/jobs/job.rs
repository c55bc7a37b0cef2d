//! Job envelope and payload definitions for webhook delivery.
//!
//! Every job pushed to a queue is a [`Job<WebhookDeliver>`]: a small envelope
//! carrying a stable job id plus the delivery payload captured at submission
//! time.
use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

// Common message structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Job<T> {
    pub message_id: String,
    pub version: String,
    pub timestamp: String,
    pub job_type: JobType,
    pub data: T,
}

impl<T> Job<T> {
    pub fn new(job_type: JobType, data: T) -> Self {
        Self {
            message_id: Uuid::new_v4().to_string(),
            version: "1.0".to_string(),
            timestamp: Utc::now().timestamp().to_string(),
            job_type,
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobType {
    WebhookDeliver,
}

/// Immutable description of one delivery unit, captured at submission time.
///
/// `timeout_ms` and `delay_ms` are stored in milliseconds; the HTTP boundary
/// accepts seconds and converts on enqueue. `deduplication_id` is the
/// *effective* identity (explicit or content-derived), not the raw submission
/// flags.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WebhookDeliver {
    pub queue_name: String,
    pub destination: String,
    pub body: String,
    pub content_type: String,
    pub error_callback: Option<String>,
    pub timeout_ms: u64,
    pub delay_ms: u64,
    pub retries: u32,
    pub deduplication_id: Option<String>,
}

impl WebhookDeliver {
    pub fn new(
        queue_name: impl Into<String>,
        destination: impl Into<String>,
        body: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            queue_name: queue_name.into(),
            destination: destination.into(),
            body: body.into(),
            content_type: content_type.into(),
            error_callback: None,
            timeout_ms: 0,
            delay_ms: 0,
            retries: 0,
            deduplication_id: None,
        }
    }

    pub fn with_error_callback(mut self, error_callback: impl Into<String>) -> Self {
        self.error_callback = Some(error_callback.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_deduplication_id(mut self, deduplication_id: Option<String>) -> Self {
        self.deduplication_id = deduplication_id;
        self
    }
}
