//! Exponential backoff retry policy for webhook delivery jobs.
//!
//! The retry budget is per job, not per worker: each job carries its own
//! `retries` count and the policy reads it off the request, so a single
//! queue can hold jobs with different budgets. The delay between attempts
//! grows exponentially up to a ceiling.

use apalis::prelude::*;
use std::time::Duration;
use tokio::time::{sleep, Sleep};
use tower::retry::Policy;

use crate::jobs::{Job, WebhookDeliver};

type Req<Ctx> = Request<Job<WebhookDeliver>, Ctx>;
type Err = Error;

/// Backoff schedule applied between consecutive attempts of one job.
///
/// The first retry waits `initial_backoff`; each further retry multiplies the
/// previous delay by `multiplier`, capped at `max_backoff`.
#[derive(Clone, Debug)]
pub struct BackoffRetryPolicy {
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Factor by which the delay grows after each attempt.
    pub multiplier: f64,
    /// Ceiling for the delay between retries.
    pub max_backoff: Duration,
}

impl Default for BackoffRetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(1000),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(60),
        }
    }
}

impl BackoffRetryPolicy {
    pub fn backoff_duration(&self, attempt: usize) -> Duration {
        let backoff =
            self.initial_backoff.as_millis() as f64 * self.multiplier.powi(attempt as i32);
        Duration::from_millis(backoff.min(self.max_backoff.as_millis() as f64) as u64)
    }
}

impl<Res, Ctx> Policy<Req<Ctx>, Res, Err> for BackoffRetryPolicy
where
    Ctx: Clone,
{
    type Future = Sleep;

    fn retry(&mut self, req: &mut Req<Ctx>, result: &mut Result<Res, Err>) -> Option<Self::Future> {
        // `clone_request` runs once before every dispatch, so the counter
        // holds the 1-based ordinal of the attempt that just finished. A job
        // with `retries = N` is retried until N + 1 attempts have run.
        let attempt = req.parts.attempt.current();
        let retries = req.args.data.retries as usize;

        match result {
            Ok(_) => None,
            // Aborted attempts are terminal regardless of remaining budget.
            Err(Error::Abort(_)) => None,
            Err(_) if attempt <= retries => {
                Some(sleep(self.backoff_duration(attempt.saturating_sub(1))))
            }
            Err(_) => None,
        }
    }

    fn clone_request(&mut self, req: &Req<Ctx>) -> Option<Req<Ctx>> {
        let req = req.clone();
        req.parts.attempt.increment();
        Some(req)
    }
}
