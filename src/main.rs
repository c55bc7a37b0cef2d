//! # Webhook Dispatcher
//!
//! A webhook dispatch service: clients submit HTTP delivery jobs into named
//! queues; per-queue workers deliver them with delay, timeout, retries and
//! failure callbacks.
//!
//! ## Features
//!
//! - Named queues with live-adjustable concurrency
//! - Delayed delivery and per-job retry budgets with exponential backoff
//! - Deduplication of pending submissions
//! - Best-effort error callbacks on terminal failure
//!
//! ## Architecture
//!
//! The service is built using Actix-web and apalis over Redis:
//! - HTTP endpoint for job submission
//! - Redis-backed durable queues, one per queue name
//! - One dispatch worker per queue, created lazily on first submission
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use webhook_dispatcher::{api, config::ServerConfig, init::initialize_app_state, logging};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    logging::setup_logging();

    let config = ServerConfig::from_env();

    let app_state = initialize_app_state(&config).await?;

    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .service(web::scope("/api/v1").configure(api::routes::configure_routes))
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
