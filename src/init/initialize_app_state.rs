//! Application state initialization
//!
//! Connects to the job broker and builds the queue registry and job producer
//! shared by the HTTP layer and the dispatch workers.
use crate::{
    config::ServerConfig,
    jobs::{connect_broker, JobProducer, QueueRegistry},
    models::{AppState, DefaultAppState},
    services::WebhookDeliveryClient,
};
use actix_web::web;
use color_eyre::Result;
use std::sync::Arc;

/// Initializes application state
///
/// # Errors
///
/// Returns an error when the broker connection cannot be established within
/// the configured timeout.
pub async fn initialize_app_state(config: &ServerConfig) -> Result<web::ThinData<DefaultAppState>> {
    let connection = connect_broker(config).await?;
    let webhook_client = Arc::new(WebhookDeliveryClient::new());
    let registry = Arc::new(QueueRegistry::new(connection, webhook_client));
    let job_producer = Arc::new(JobProducer::new(registry));

    Ok(web::ThinData(AppState { job_producer }))
}
