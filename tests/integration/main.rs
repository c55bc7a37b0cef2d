//! Integration test entry point.

mod logging;
