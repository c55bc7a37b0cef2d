//! # Services Module
//!
//! Outbound integrations of the dispatch service.

mod webhook;
pub use webhook::*;
