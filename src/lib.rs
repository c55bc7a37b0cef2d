//! Webhook Dispatch Service Library
//!
//! This library implements a webhook dispatch service: clients submit HTTP
//! delivery jobs into named queues, and per-queue workers deliver them with
//! delay, per-attempt timeout, retry with exponential backoff and best-effort
//! failure callbacks. Queued jobs are persisted in a Redis-backed broker.
//!
//! # Module Structure
//!
//! - `api`: HTTP routes and controllers
//! - `config`: Environment-driven configuration
//! - `constants`: Submission defaults and worker limits
//! - `init`: Process bootstrap
//! - `jobs`: Queue registry, job producer and dispatch workers
//! - `logging`: Logging setup
//! - `models`: Request, response and state types
//! - `services`: Outbound HTTP delivery client
//! - `utils`: Common helpers

pub mod api;
pub mod config;
pub mod constants;
pub mod init;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use models::{ApiError, AppState, DefaultAppState};
