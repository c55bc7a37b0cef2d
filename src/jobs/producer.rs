//! Submission side of the dispatch engine.
//!
//! The producer takes a validated enqueue request, registers the queue and
//! its worker, applies the submission's parallelism, derives and reserves the
//! deduplication identity, and pushes the job into the durable broker.
use std::sync::Arc;

use apalis::prelude::Storage;
use apalis_redis::RedisError;
use async_trait::async_trait;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::{
    jobs::{derive_deduplication_id, Job, JobType, QueueRegistry, WebhookDeliver},
    models::EnqueueRequest,
    utils::{schedule_timestamp, seconds_ms},
};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error, Serialize)]
pub enum JobProducerError {
    #[error("Queue error: {0}")]
    QueueError(String),
}

impl From<RedisError> for JobProducerError {
    fn from(_: RedisError) -> Self {
        JobProducerError::QueueError("Queue error".to_string())
    }
}

/// Result of one submission: either a freshly enqueued job, or a no-op
/// against a deduplication identity that is still pending in the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum EnqueueReceipt {
    Enqueued {
        job_id: String,
        queue_name: String,
    },
    Deduplicated {
        deduplication_id: String,
        queue_name: String,
    },
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait JobProducerTrait: Send + Sync {
    async fn produce_webhook_job(
        &self,
        request: EnqueueRequest,
    ) -> Result<EnqueueReceipt, JobProducerError>;
}

#[derive(Debug)]
pub struct JobProducer {
    registry: Arc<QueueRegistry>,
}

impl JobProducer {
    pub fn new(registry: Arc<QueueRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl JobProducerTrait for JobProducer {
    async fn produce_webhook_job(
        &self,
        request: EnqueueRequest,
    ) -> Result<EnqueueReceipt, JobProducerError> {
        let entry = self.registry.ensure(&request.queue_name);
        // The latest submission's parallelism is authoritative, including on
        // a freshly created queue.
        entry.gate.set_limit(request.parallelism);

        let deduplication_id = derive_deduplication_id(
            request.deduplication_id.as_deref(),
            request.content_based_deduplication,
            &request.body,
        );
        if let Some(id) = &deduplication_id {
            if !entry.dedup.try_reserve(id) {
                info!(
                    "Deduplication id '{}' already pending in queue '{}', submission skipped",
                    id, request.queue_name
                );
                return Ok(EnqueueReceipt::Deduplicated {
                    deduplication_id: id.clone(),
                    queue_name: request.queue_name,
                });
            }
        }

        let mut payload = WebhookDeliver::new(
            &request.queue_name,
            &request.destination,
            &request.body,
            &request.content_type,
        )
        .with_timeout_ms(seconds_ms(request.timeout))
        .with_delay_ms(seconds_ms(request.delay))
        .with_retries(request.retries)
        .with_deduplication_id(deduplication_id.clone());
        if let Some(callback) = &request.error_callback {
            payload = payload.with_error_callback(callback);
        }

        let job = Job::new(JobType::WebhookDeliver, payload);
        let job_id = job.message_id.clone();

        let mut storage = entry.storage.clone();
        let result = if request.delay > 0 {
            storage.schedule(job, schedule_timestamp(request.delay)).await
        } else {
            storage.push(job).await
        };
        if let Err(e) = result {
            // A failed enqueue must not leave the identity reserved.
            if let Some(id) = &deduplication_id {
                entry.dedup.release(id);
            }
            return Err(e.into());
        }

        info!(
            "Webhook job {} enqueued on queue '{}'",
            job_id, request.queue_name
        );
        Ok(EnqueueReceipt::Enqueued {
            job_id,
            queue_name: request.queue_name,
        })
    }
}
