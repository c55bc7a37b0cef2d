//! Configuration system for the webhook dispatch service.
//!
//! All configuration is environment-driven: server binding, the Redis broker
//! location and the logging setup (see `logging`).
mod server_config;
pub use server_config::*;
