//! Property test entry point.

mod backoff;
mod dedup;
mod logging;
