//! Route hit counting.
//!
//! # Responsibilities
//! - Serialize concurrent hit increments through a single consumer task
//! - Publish the running total without locks
//! - Drain outstanding increments on shutdown
//!
//! # Design Decisions
//! - Bounded mpsc queue: a full queue applies backpressure to request
//!   tasks instead of dropping increments
//! - Only the consumer task writes the published total (single writer);
//!   readers take an atomic snapshot
//! - The worker handle is joinable so shutdown can await settlement

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Handle to the hit counter.
///
/// Cloneable; each counted route filter holds one and sends increments
/// into the shared queue.
#[derive(Clone)]
pub struct HitCounter {
    tx: mpsc::Sender<u64>,
    total: Arc<AtomicU64>,
}

/// The consumer side of the counter: a single task applying increments in
/// FIFO order.
pub struct CounterWorker {
    handle: JoinHandle<()>,
}

impl HitCounter {
    /// Create the counter and spawn its consumer task.
    ///
    /// The task runs until `shutdown` fires (remaining queued increments
    /// are drained first) or every `HitCounter` handle is dropped.
    pub fn spawn(capacity: usize, mut shutdown: broadcast::Receiver<()>) -> (Self, CounterWorker) {
        let (tx, mut rx) = mpsc::channel::<u64>(capacity);
        let total = Arc::new(AtomicU64::new(0));
        let published = total.clone();

        let handle = tokio::spawn(async move {
            let mut count: u64 = 0;
            loop {
                tokio::select! {
                    delta = rx.recv() => match delta {
                        Some(delta) => {
                            count += delta;
                            published.store(count, Ordering::Release);
                            tracing::debug!(count, "Route hit counted");
                            metrics::counter!("minnie_route_hits_total").increment(delta);
                        }
                        // Every sender is gone; nothing more can arrive.
                        None => break,
                    },
                    _ = shutdown.recv() => {
                        while let Ok(delta) = rx.try_recv() {
                            count += delta;
                            published.store(count, Ordering::Release);
                            metrics::counter!("minnie_route_hits_total").increment(delta);
                        }
                        break;
                    }
                }
            }
            tracing::debug!(count, "Hit counter stopped");
        });

        (Self { tx, total }, CounterWorker { handle })
    }

    /// Enqueue one hit.
    ///
    /// Awaits when the queue is full; the consumer applies increments in
    /// the order they were enqueued. A send after the worker has stopped
    /// is discarded.
    pub async fn increment(&self) {
        let _ = self.tx.send(1).await;
    }

    /// Snapshot of the last published total.
    pub fn value(&self) -> u64 {
        self.total.load(Ordering::Acquire)
    }
}

impl CounterWorker {
    /// Wait for the consumer task to finish draining.
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
