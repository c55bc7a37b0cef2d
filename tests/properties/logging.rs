//! Property-based tests for logging.
//!
//! These tests verify the behavior of the `compute_rolled_file_path`
//! function, focusing on suffix handling and output consistency across
//! arbitrary base paths and dates.
//!
//!   Refer to `src/logging/mod.rs` for more details.
use proptest::{prelude::*, test_runner::Config};
use webhook_dispatcher::logging::compute_rolled_file_path;

proptest! {
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// Property test for compute_rolled_file_path when base ends with ".log"
  #[test]
  fn prop_compute_rolled_file_path_with_log_suffix(
    base in ".*[^.]",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}"
  ) {
      let base_with_log = format!("{}.log", base);
      let result = compute_rolled_file_path(&base_with_log, &date, 1);
      let expected = format!("{}-{}.{}.log", base, date, 1);
      prop_assert_eq!(result, expected);
  }

  /// Property test for compute_rolled_file_path when base does not end with ".log"
  #[test]
  fn prop_compute_rolled_file_path_without_log_suffix(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..100
  ) {
      let base_non_log = if base.ends_with(".log") {
          format!("{}x", base)
      } else {
          base
      };
      let result = compute_rolled_file_path(&base_non_log, &date, index);
      let expected = format!("{}-{}.{}.log", base_non_log, date, index);
      prop_assert_eq!(result, expected);
  }
}
