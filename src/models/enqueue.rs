//! Request and response models for the enqueue endpoint.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    constants::{
        DEFAULT_CONTENT_TYPE, DEFAULT_PARALLELISM, DEFAULT_TIMEOUT_SECONDS, WORKER_MAX_CONCURRENCY,
    },
    jobs::EnqueueReceipt,
    models::ApiError,
};

/// One webhook delivery submission.
///
/// Field names follow the wire schema: camelCase, with the outbound content
/// type spelled `Content-Type`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnqueueRequest {
    pub queue_name: String,
    pub destination: String,
    pub body: String,
    #[serde(default)]
    pub error_callback: Option<String>,
    #[serde(rename = "Content-Type", default = "default_content_type")]
    pub content_type: String,
    /// Processing timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Concurrency limit applied to the whole queue, effective immediately.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
    /// Delay until the job is processed, in seconds.
    #[serde(default)]
    pub delay: u64,
    /// Maximum retry attempts after the first failure.
    #[serde(default)]
    pub retries: u32,
    #[serde(default)]
    pub deduplication_id: Option<String>,
    #[serde(default)]
    pub content_based_deduplication: bool,
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_parallelism() -> usize {
    DEFAULT_PARALLELISM
}

impl EnqueueRequest {
    /// Field validation performed before any job is created. Violations are
    /// surfaced synchronously to the caller as 400 responses.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.queue_name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "queueName must not be empty".to_string(),
            ));
        }
        if reqwest::Url::parse(&self.destination).is_err() {
            return Err(ApiError::BadRequest(
                "destination must be a valid URL".to_string(),
            ));
        }
        if let Some(callback) = &self.error_callback {
            if reqwest::Url::parse(callback).is_err() {
                return Err(ApiError::BadRequest(
                    "errorCallback must be a valid URL".to_string(),
                ));
            }
        }
        // The worker pulls at most WORKER_MAX_CONCURRENCY attempts at once,
        // so a larger gate limit would be silently ineffective.
        if self.parallelism < 1 || self.parallelism > WORKER_MAX_CONCURRENCY {
            return Err(ApiError::BadRequest(format!(
                "parallelism must be between 1 and {}",
                WORKER_MAX_CONCURRENCY
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnqueueResponse {
    /// Id of the enqueued job; absent when the submission was deduplicated.
    #[schema(nullable = false)]
    pub job_id: Option<String>,
    pub queue_name: String,
    pub deduplicated: bool,
}

impl From<EnqueueReceipt> for EnqueueResponse {
    fn from(receipt: EnqueueReceipt) -> Self {
        match receipt {
            EnqueueReceipt::Enqueued { job_id, queue_name } => Self {
                job_id: Some(job_id),
                queue_name,
                deduplicated: false,
            },
            EnqueueReceipt::Deduplicated { queue_name, .. } => Self {
                job_id: None,
                queue_name,
                deduplicated: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> EnqueueRequest {
        serde_json::from_str(
            r#"{"queueName":"q1","destination":"http://example.com/ok","body":"hi"}"#,
        )
        .expect("deserialize")
    }

    #[test]
    fn test_defaults_are_applied() {
        let request = minimal_request();

        assert_eq!(request.content_type, "application/json");
        assert_eq!(request.timeout, 30);
        assert_eq!(request.parallelism, 1);
        assert_eq!(request.delay, 0);
        assert_eq!(request.retries, 0);
        assert!(request.deduplication_id.is_none());
        assert!(!request.content_based_deduplication);
    }

    #[test]
    fn test_content_type_uses_header_spelling() {
        let request: EnqueueRequest = serde_json::from_str(
            r#"{"queueName":"q1","destination":"http://example.com/ok","body":"hi","Content-Type":"text/plain"}"#,
        )
        .expect("deserialize");

        assert_eq!(request.content_type, "text/plain");
    }

    #[test]
    fn test_camel_case_fields_deserialize() {
        let request: EnqueueRequest = serde_json::from_str(
            r#"{
                "queueName":"q1",
                "destination":"http://example.com/ok",
                "body":"hi",
                "errorCallback":"http://example.com/errors",
                "deduplicationId":"order-1",
                "contentBasedDeduplication":true,
                "parallelism":4,
                "retries":2,
                "delay":10,
                "timeout":5
            }"#,
        )
        .expect("deserialize");

        assert_eq!(
            request.error_callback.as_deref(),
            Some("http://example.com/errors")
        );
        assert_eq!(request.deduplication_id.as_deref(), Some("order-1"));
        assert!(request.content_based_deduplication);
        assert_eq!(request.parallelism, 4);
        assert_eq!(request.retries, 2);
        assert_eq!(request.delay, 10);
        assert_eq!(request.timeout, 5);
    }

    #[test]
    fn test_validate_accepts_minimal_request() {
        assert!(minimal_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_queue_name() {
        let mut request = minimal_request();
        request.queue_name = "  ".to_string();

        match request.validate() {
            Err(ApiError::BadRequest(msg)) => assert!(msg.contains("queueName")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_malformed_destination() {
        let mut request = minimal_request();
        request.destination = "not a url".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_error_callback() {
        let mut request = minimal_request();
        request.error_callback = Some("not a url".to_string());

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_parallelism() {
        let mut request = minimal_request();
        request.parallelism = 0;

        match request.validate() {
            Err(ApiError::BadRequest(msg)) => assert!(msg.contains("parallelism")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_parallelism_above_worker_ceiling() {
        let mut request = minimal_request();
        request.parallelism = WORKER_MAX_CONCURRENCY + 1;

        match request.validate() {
            Err(ApiError::BadRequest(msg)) => assert!(msg.contains("parallelism")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_parallelism_at_worker_ceiling() {
        let mut request = minimal_request();
        request.parallelism = WORKER_MAX_CONCURRENCY;

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_from_enqueued_receipt() {
        let response: EnqueueResponse = EnqueueReceipt::Enqueued {
            job_id: "abc".to_string(),
            queue_name: "q1".to_string(),
        }
        .into();

        assert_eq!(response.job_id.as_deref(), Some("abc"));
        assert_eq!(response.queue_name, "q1");
        assert!(!response.deduplicated);
    }

    #[test]
    fn test_response_from_deduplicated_receipt() {
        let response: EnqueueResponse = EnqueueReceipt::Deduplicated {
            deduplication_id: "dedup-1".to_string(),
            queue_name: "q1".to_string(),
        }
        .into();

        assert!(response.job_id.is_none());
        assert!(response.deduplicated);
    }
}
