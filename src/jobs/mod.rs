/// This module handles broker connectivity for queues.
mod queue;
pub use queue::*;

/// This module contains the dispatch worker callbacks.
mod handlers;
pub use handlers::*;

/// This module is responsible for producing jobs.
mod producer;
pub use producer::*;

/// This module defines the job structure and related operations.
mod job;
pub use job::*;

/// This module derives deduplication identities for submissions.
mod dedup;
pub use dedup::*;

/// This module owns the queue/worker registry and its concurrency gates.
mod registry;
pub use registry::*;

/// This module implements retry backoff strategies for job processing.
mod retry_backoff;
pub use retry_backoff::*;

/// Boxed error type reported for a failed attempt.
pub type BoxedAttemptError = Box<dyn std::error::Error + Send + Sync>;
