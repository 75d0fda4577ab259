//! One-shot background sum worker
//!
//! Each worker is a dedicated OS thread that accepts exactly one
//! [`SumRequest`] and answers with exactly one [`SumReply`], then exits.
//! Nothing is shared with the caller except the two channels.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use futures::channel::oneshot;
use thiserror::Error;
use tracing::{debug, info};

use crate::web_app::model::{sum_below, SumReply, SumRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("failed to spawn sum worker: {0}")]
    Spawn(String),
    #[error("sum worker exited without replying")]
    Disconnected,
    #[error("sum worker did not reply within {0:?}")]
    Timeout(Duration),
}

/// Handle to a spawned worker that has not yet received its request
pub struct SumWorker {
    request_tx: mpsc::SyncSender<SumRequest>,
    reply_rx: oneshot::Receiver<SumReply>,
}

impl SumWorker {
    /// Spawn the worker thread; it blocks until the request arrives
    pub fn spawn() -> Result<Self, WorkerError> {
        let (request_tx, request_rx) = mpsc::sync_channel::<SumRequest>(1);
        let (reply_tx, reply_rx) = oneshot::channel::<SumReply>();

        thread::Builder::new()
            .name("sum-worker".to_string())
            .spawn(move || {
                // Handle dropped without a request
                let Ok(SumRequest(bound)) = request_rx.recv() else {
                    debug!("sum_worker_abandoned");
                    return;
                };

                let started = Instant::now();
                let sum = sum_below(bound);
                info!(
                    bound = %bound,
                    sum = %sum,
                    elapsed_ms = %started.elapsed().as_millis(),
                    "sum_worker_done"
                );

                // Receiver may be gone after a caller-side timeout
                let _ = reply_tx.send(SumReply(sum));
            })
            .map_err(|e| WorkerError::Spawn(e.to_string()))?;

        Ok(Self { request_tx, reply_rx })
    }

    /// Send the single request and await the single reply
    ///
    /// Consumes the handle: a worker cannot be reused.
    pub async fn request(self, bound: u32) -> Result<u64, WorkerError> {
        let Self { request_tx, reply_rx } = self;

        request_tx
            .send(SumRequest(bound))
            .map_err(|_| WorkerError::Disconnected)?;
        drop(request_tx);

        reply_rx
            .await
            .map(|SumReply(sum)| sum)
            .map_err(|_| WorkerError::Disconnected)
    }
}
