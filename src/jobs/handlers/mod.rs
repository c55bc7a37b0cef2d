use std::sync::Arc;

use apalis::prelude::{Attempt, Error};
use log::info;

mod webhook_delivery_handler;
pub use webhook_delivery_handler::*;

/// True when the current attempt has exhausted the job's retry budget:
/// a job with `retries = N` runs at most `N + 1` attempts.
///
/// The retry machinery clones the request once before every dispatch and the
/// clone increments the shared attempt counter, so inside a running attempt
/// the counter holds that attempt's 1-based ordinal.
pub fn is_terminal_attempt(attempt: &Attempt, retries: u32) -> bool {
    attempt.current() > retries as usize
}

/// Maps a failed attempt onto the broker error that drives the retry
/// decision: abort terminally or fail and let the backoff policy retry.
pub fn attempt_failure(message: String, terminal: bool) -> Error {
    if terminal {
        info!("Retry budget exhausted, failing job terminally");
        Error::Abort(Arc::new(message.into()))
    } else {
        info!("Attempt failed, leaving job to the retry policy");
        Error::Failed(Arc::new(message.into()))
    }
}
