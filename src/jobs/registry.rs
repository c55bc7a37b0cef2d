//! Process-wide queue registry.
//!
//! Maps a queue name to exactly one queue storage and one dispatch worker,
//! created together on first submission and kept for the life of the process.
//! The registry is an explicit context object owned by the application state,
//! not ambient global state; the only mutations are "create if absent" and
//! "overwrite the concurrency limit", both idempotent.
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use apalis::layers::ErrorHandlingLayer;
use apalis::prelude::*;
use apalis_redis::{ConnectionManager, RedisStorage};
use log::info;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

use crate::{
    constants::{DEFAULT_PARALLELISM, WORKER_MAX_CONCURRENCY},
    jobs::{queue_storage, webhook_delivery_handler, BackoffRetryPolicy, Job, WebhookDeliver},
    services::WebhookDeliveryClient,
};

/// Live-mutable concurrency limit for one queue.
///
/// Every attempt holds a permit while it runs. Raising the limit takes effect
/// immediately; lowering it retires permits as running attempts finish, so
/// in-flight work is never interrupted.
#[derive(Debug)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    limit: Mutex<usize>,
}

impl ConcurrencyGate {
    pub fn new(limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit: Mutex::new(limit),
        }
    }

    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, AcquireError> {
        self.semaphore.clone().acquire_owned().await
    }

    pub fn limit(&self) -> usize {
        *self
            .limit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Overwrites the limit with the value from the latest submission.
    pub fn set_limit(&self, new_limit: usize) {
        let mut limit = self
            .limit
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if new_limit > *limit {
            self.semaphore.add_permits(new_limit - *limit);
        } else if new_limit < *limit {
            let mut shortfall = *limit - new_limit;
            shortfall -= self.semaphore.forget_permits(shortfall);
            // Permits still held by running attempts are retired as they drop.
            for _ in 0..shortfall {
                let semaphore = self.semaphore.clone();
                tokio::spawn(async move {
                    if let Ok(permit) = semaphore.acquire_owned().await {
                        permit.forget();
                    }
                });
            }
        }
        *limit = new_limit;
    }
}

/// Deduplication identities currently pending or delayed in one queue.
///
/// An identity blocks a second enqueue only until its job starts running;
/// the dispatch worker releases it at attempt start.
#[derive(Debug, Default)]
pub struct ActiveDeduplications {
    ids: Mutex<HashSet<String>>,
}

impl ActiveDeduplications {
    /// Reserves an identity. Returns `false` when it is already pending.
    pub fn try_reserve(&self, id: &str) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id.to_string())
    }

    /// Frees an identity; safe to call more than once.
    pub fn release(&self, id: &str) {
        self.ids
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(id);
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(id)
    }
}

/// One queue's handles: the broker storage, the live concurrency gate and the
/// pending deduplication identities. Cloning shares the underlying state.
#[derive(Clone, Debug)]
pub struct QueueEntry {
    pub storage: RedisStorage<Job<WebhookDeliver>>,
    pub gate: Arc<ConcurrencyGate>,
    pub dedup: Arc<ActiveDeduplications>,
}

/// State handed to the dispatch worker of one queue via apalis `Data`.
#[derive(Clone, Debug)]
pub struct QueueContext {
    pub gate: Arc<ConcurrencyGate>,
    pub dedup: Arc<ActiveDeduplications>,
    pub webhook_client: Arc<WebhookDeliveryClient>,
}

pub struct QueueRegistry {
    connection: ConnectionManager,
    webhook_client: Arc<WebhookDeliveryClient>,
    entries: Mutex<HashMap<String, QueueEntry>>,
}

impl std::fmt::Debug for QueueRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueRegistry")
            .field("queues", &self.queue_count())
            .finish()
    }
}

impl QueueRegistry {
    pub fn new(connection: ConnectionManager, webhook_client: Arc<WebhookDeliveryClient>) -> Self {
        Self {
            connection,
            webhook_client,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the queue entry for `queue_name`, creating the queue storage
    /// and spawning its dispatch worker on first use. The map lock is held
    /// across creation, so the per-name pair is created exactly once.
    pub fn ensure(&self, queue_name: &str) -> QueueEntry {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(entry) = entries.get(queue_name) {
            return entry.clone();
        }

        let storage = queue_storage(self.connection.clone(), queue_name);
        let gate = Arc::new(ConcurrencyGate::new(DEFAULT_PARALLELISM));
        let dedup = Arc::new(ActiveDeduplications::default());
        spawn_queue_worker(
            queue_name,
            storage.clone(),
            QueueContext {
                gate: gate.clone(),
                dedup: dedup.clone(),
                webhook_client: self.webhook_client.clone(),
            },
        );

        let entry = QueueEntry {
            storage,
            gate,
            dedup,
        };
        entries.insert(queue_name.to_string(), entry.clone());
        info!("Created queue and dispatch worker for '{}'", queue_name);
        entry
    }

    pub fn queue_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

/// Builds the dispatch worker for one queue and runs it for the remainder of
/// the process. The apalis-level concurrency is a fixed ceiling; the real
/// limit is the queue's gate, which stays adjustable after the worker exists.
fn spawn_queue_worker(
    queue_name: &str,
    storage: RedisStorage<Job<WebhookDeliver>>,
    context: QueueContext,
) {
    let worker = WorkerBuilder::new(queue_name)
        .layer(ErrorHandlingLayer::new())
        .enable_tracing()
        .catch_panic()
        .retry(BackoffRetryPolicy::default())
        .concurrency(WORKER_MAX_CONCURRENCY)
        .data(context)
        .backend(storage)
        .build_fn(webhook_delivery_handler);

    tokio::spawn(async move {
        worker.run().await;
    });
}
