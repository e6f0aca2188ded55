use std::thread::{self, JoinHandle};
use crossbeam::channel::Receiver;
use tracing::{debug, trace};

use crate::envelope::Envelope;
use crate::pool::types::{Job, PoolError, Task, TaskError};

/// Spawn one named worker thread draining `rx`.
pub(crate) fn spawn_worker(
    index: usize,
    envelope: Envelope,
    rx: Receiver<Job>,
) -> Result<JoinHandle<()>, PoolError> {
    thread::Builder::new()
        .name(format!("vault-envelope-worker-{index}"))
        .spawn(move || run_worker(index, envelope, rx))
        .map_err(|e| PoolError::Spawn { worker: index, msg: e.to_string() })
}

/// Worker loop: one job at a time until the queue closes.
fn run_worker(index: usize, envelope: Envelope, rx: Receiver<Job>) {
    debug!(worker = index, "worker started");

    while let Ok(Job { task, reply }) = rx.recv() {
        let name = task.name();
        let result = execute(&envelope, task);
        trace!(worker = index, task = name, ok = result.is_ok(), "task finished");

        if reply.send(result).is_err() {
            trace!(worker = index, "ticket dropped before reply");
        }
    }

    debug!(worker = index, "queue closed, worker exiting");
}

/// Run a task against the shared codec.
pub(crate) fn execute(envelope: &Envelope, task: Task) -> Result<String, TaskError> {
    match task {
        Task::Encrypt { plaintext, password } => {
            envelope.encrypt(&plaintext, &password).map_err(TaskError::Encrypt)
        }
        Task::Decrypt { envelope: token, password } => {
            envelope.decrypt(&token, &password).map_err(TaskError::Decrypt)
        }
    }
}
