//! Property-based tests for the retry backoff schedule.
use proptest::prelude::*;
use std::time::Duration;
use webhook_dispatcher::jobs::BackoffRetryPolicy;

proptest! {
  // Most sampled attempts fall at or above the cap and are filtered by
  // `prop_assume!`, so the default global-reject budget is too small.
  #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]

  /// The delay between consecutive attempts never decreases and never
  /// exceeds the configured ceiling.
  #[test]
  fn prop_backoff_is_monotonic_and_capped(attempt in 0usize..32) {
      let policy = BackoffRetryPolicy::default();

      let current = policy.backoff_duration(attempt);
      let next = policy.backoff_duration(attempt + 1);

      prop_assert!(next >= current);
      prop_assert!(current <= policy.max_backoff);
  }

  /// Below the ceiling the delay grows strictly, so retries spread out.
  #[test]
  fn prop_backoff_grows_strictly_below_cap(attempt in 0usize..32) {
      let policy = BackoffRetryPolicy::default();

      let current = policy.backoff_duration(attempt);
      let next = policy.backoff_duration(attempt + 1);
      prop_assume!(next < policy.max_backoff);

      prop_assert!(next > current);
      prop_assert!(current >= Duration::from_millis(1000));
  }
}
