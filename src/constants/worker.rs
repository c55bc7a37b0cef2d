/// Content type applied when a submission does not specify one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Per-attempt timeout, in seconds, when a submission does not specify one.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Queue concurrency applied until a submission overrides it.
pub const DEFAULT_PARALLELISM: usize = 1;

/// Fixed ceiling on attempts a dispatch worker pulls concurrently; the
/// effective limit is the queue's live concurrency gate.
pub const WORKER_MAX_CONCURRENCY: usize = 64;
