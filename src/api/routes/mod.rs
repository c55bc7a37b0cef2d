//! # API Routes Module
//!
//! Configures HTTP routes for the dispatch service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/enqueue` - Webhook job submission

pub mod health;
pub mod queue;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init).configure(queue::init);
}
