//! Property-based tests for deduplication identity derivation.
//!
//! These tests verify that content-based identities are stable for
//! logically-equal JSON payloads regardless of key order, that distinct
//! content yields distinct identities, and that an explicit id always wins.
use proptest::{collection::btree_map, prelude::*, test_runner::Config};
use webhook_dispatcher::jobs::derive_deduplication_id;

fn object_in_order<'a>(pairs: impl Iterator<Item = (&'a String, &'a i64)>) -> String {
    let fields: Vec<String> = pairs.map(|(k, v)| format!("\"{}\":{}", k, v)).collect();
    format!("{{{}}}", fields.join(","))
}

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  /// Key order never affects a content-derived identity.
  #[test]
  fn prop_content_identity_is_key_order_insensitive(
    entries in btree_map("[a-z]{1,8}", any::<i64>(), 1..8usize)
  ) {
      let forward = object_in_order(entries.iter());
      let reverse = object_in_order(entries.iter().rev());

      let first = derive_deduplication_id(None, true, &forward);
      let second = derive_deduplication_id(None, true, &reverse);

      prop_assert!(first.is_some());
      prop_assert_eq!(first, second);
  }

  /// Distinct plain-string bodies derive distinct identities.
  #[test]
  fn prop_distinct_bodies_derive_distinct_identities(
    first in "[ -~]{1,64}",
    second in "[ -~]{1,64}"
  ) {
      prop_assume!(first != second);
      // Restrict to bodies that are not JSON, so raw content is compared.
      prop_assume!(serde_json::from_str::<serde_json::Value>(&first).is_err());
      prop_assume!(serde_json::from_str::<serde_json::Value>(&second).is_err());

      let first_id = derive_deduplication_id(None, true, &first);
      let second_id = derive_deduplication_id(None, true, &second);

      prop_assert_ne!(first_id, second_id);
  }

  /// An explicit id is used verbatim, whatever the other inputs are.
  #[test]
  fn prop_explicit_id_wins(
    id in "[ -~]{1,32}",
    content_based in any::<bool>(),
    body in "[ -~]{0,64}"
  ) {
      let derived = derive_deduplication_id(Some(&id), content_based, &body);
      prop_assert_eq!(derived, Some(id));
  }

  /// Without an explicit id or the content-based flag, no identity exists.
  #[test]
  fn prop_no_identity_without_request(body in "[ -~]{0,64}") {
      prop_assert_eq!(derive_deduplication_id(None, false, &body), None);
  }
}
