//! Deduplication identity derivation for submitted jobs.
//!
//! A submission may carry an explicit deduplication id, request a
//! content-derived one, or opt out entirely. The derived identity is what the
//! queue registry uses to suppress duplicate pending jobs.
use sha2::{Digest, Sha256};

/// Derives the effective deduplication identity for a submission.
///
/// An explicit id always wins, verbatim. Otherwise, when content-based
/// deduplication is requested, the identity is a deterministic hash of the
/// body: JSON bodies are canonicalized first so that logically-equal payloads
/// hash identically regardless of key order. Absence of an identity is a
/// normal result, not an error.
pub fn derive_deduplication_id(
    explicit_id: Option<&str>,
    content_based: bool,
    body: &str,
) -> Option<String> {
    if let Some(id) = explicit_id {
        return Some(id.to_string());
    }
    if !content_based {
        return None;
    }
    Some(content_hash(body))
}

/// Stable, order-insensitive hash of a payload body.
///
/// Bodies that parse as JSON are re-serialized through `serde_json::Value`,
/// whose object representation keeps keys sorted, before hashing. Anything
/// else is hashed as raw bytes.
fn content_hash(body: &str) -> String {
    let canonical = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    };
    hex::encode(Sha256::digest(canonical.as_bytes()))
}
