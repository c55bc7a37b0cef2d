//! Dispatch worker callback running the delivery protocol.
//!
//! Invoked once per eligible attempt, concurrently up to the queue's current
//! parallelism. All failure paths are contained per job; nothing here is
//! fatal to the process.
use std::sync::Arc;

use apalis::prelude::{Attempt, Data, Error};
use log::{info, warn};

use crate::jobs::{
    attempt_failure, is_terminal_attempt, BoxedAttemptError, Job, QueueContext, WebhookDeliver,
};

/// Runs one delivery attempt for a webhook job.
///
/// Order matters: the attempt first takes a permit from the queue's live
/// concurrency gate, then frees the job's deduplication identity (the job is
/// now running and the identity may be reused), then performs the delivery.
/// On terminal failure the error callback fires before the abort is reported.
pub async fn webhook_delivery_handler(
    job: Job<WebhookDeliver>,
    context: Data<QueueContext>,
    attempt: Attempt,
) -> Result<(), Error> {
    let _permit = context.gate.acquire().await.map_err(|e| {
        let boxed: BoxedAttemptError = Box::new(e);
        Error::Abort(Arc::new(boxed))
    })?;

    if let Some(id) = &job.data.deduplication_id {
        context.dedup.release(id);
    }

    info!(
        "Delivering job {} to {} (queue '{}', attempt {})",
        job.message_id,
        job.data.destination,
        job.data.queue_name,
        attempt.current()
    );

    match context.webhook_client.deliver(&job.data).await {
        Ok(()) => {
            info!("Job {} delivered", job.message_id);
            Ok(())
        }
        Err(error) => {
            let message = error.to_string();
            warn!(
                "Job {} attempt {} failed: {}",
                job.message_id,
                attempt.current(),
                message
            );
            let terminal = is_terminal_attempt(&attempt, job.data.retries);
            if terminal {
                context.webhook_client.notify_failure(&job, &message).await;
            }
            Err(attempt_failure(message, terminal))
        }
    }
}
