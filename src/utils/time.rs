use chrono::Utc;

/// Converts seconds to milliseconds, saturating instead of overflowing for
/// out-of-range caller-supplied values.
pub const fn seconds_ms(seconds: u64) -> u64 {
    seconds.saturating_mul(1000)
}

/// Unix timestamp at which a job delayed by `delay_seconds` becomes eligible.
pub fn schedule_timestamp(delay_seconds: u64) -> i64 {
    let delay = i64::try_from(delay_seconds).unwrap_or(i64::MAX);
    Utc::now().timestamp().saturating_add(delay)
}
