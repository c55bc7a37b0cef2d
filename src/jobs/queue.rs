//! Broker connectivity for job queues.
//!
//! The durable broker is Redis, accessed through apalis storages. One
//! connection is established at process start and shared by every queue the
//! registry creates afterwards; each named queue maps to its own storage
//! namespace on that connection.
use apalis_redis::{Config, ConnectionManager, RedisStorage};
use color_eyre::{eyre, Result};
use log::error;
use serde::{de::DeserializeOwned, Serialize};
use tokio::time::{timeout, Duration};

use crate::config::ServerConfig;

/// Connects to the Redis broker, bounded by the configured connection timeout.
pub async fn connect_broker(config: &ServerConfig) -> Result<ConnectionManager> {
    let redis_url = config.redis_url.clone();
    let connection_timeout = Duration::from_millis(config.redis_connection_timeout_ms);
    match timeout(connection_timeout, apalis_redis::connect(redis_url.clone())).await {
        Ok(result) => result.map_err(|e| {
            error!("Failed to connect to Redis at {}: {}", redis_url, e);
            eyre::eyre!(
                "Failed to connect to Redis. Please ensure Redis is running and accessible at {}. Error: {}",
                redis_url,
                e
            )
        }),
        Err(_) => {
            error!("Timeout connecting to Redis at {}", redis_url);
            Err(eyre::eyre!(
                "Timed out after {} milliseconds while connecting to Redis at {}",
                config.redis_connection_timeout_ms,
                redis_url
            ))
        }
    }
}

/// Creates the storage handle for a named queue on the shared connection.
///
/// The queue name becomes the storage namespace, so jobs from different
/// queues never interleave.
pub fn queue_storage<T: Serialize + DeserializeOwned>(
    connection: ConnectionManager,
    queue_name: &str,
) -> RedisStorage<T> {
    let config = Config::default().set_namespace(&storage_namespace(queue_name));
    RedisStorage::new_with_config(connection, config)
}

fn storage_namespace(queue_name: &str) -> String {
    format!("webhook_dispatcher:{}", queue_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_is_derived_from_queue_name() {
        assert_eq!(storage_namespace("orders"), "webhook_dispatcher:orders");
        assert_eq!(storage_namespace("q1"), "webhook_dispatcher:q1");
    }

    #[test]
    fn test_distinct_queues_get_distinct_namespaces() {
        assert_ne!(storage_namespace("orders"), storage_namespace("invoices"));
    }

    #[test]
    fn test_storage_configuration_uses_namespace() {
        let config = Config::default().set_namespace(&storage_namespace("orders"));
        assert_eq!(config.get_namespace(), "webhook_dispatcher:orders");
    }
}
