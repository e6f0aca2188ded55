//! pool/mod.rs
//! Bounded pool of stateless envelope workers.
//!
//! Lifecycle is explicit: `init -> dispatch* -> shutdown`. Tasks are routed
//! round-robin; each worker owns a bounded queue and a clone of the
//! immutable `Envelope`. Workers share no salt, IV, or key material, so no
//! cross-task synchronisation exists beyond the queues themselves.

pub mod types;
pub mod worker;

pub use types::{PoolError, Task, TaskError, Ticket};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;
use crossbeam::channel::{bounded, Sender};
use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::envelope::Envelope;
use types::Job;

pub struct WorkerPool {
    queues: Vec<Sender<Job>>,
    handles: Vec<JoinHandle<()>>,
    next: AtomicUsize,
}

impl WorkerPool {
    /// Spawn the workers described by `config`.
    pub fn init(config: &PoolConfig, envelope: Envelope) -> Result<Self, PoolError> {
        config.validate()?;
        let count = config.worker_count();

        let mut pool = Self {
            queues: Vec::with_capacity(count),
            handles: Vec::with_capacity(count),
            next: AtomicUsize::new(0),
        };

        for index in 0..count {
            let (tx, rx) = bounded::<Job>(config.queue_depth);
            // On failure `pool` drops here and joins the workers already spawned.
            let handle = worker::spawn_worker(index, envelope.clone(), rx)?;
            pool.queues.push(tx);
            pool.handles.push(handle);
        }

        debug!(workers = count, queue_depth = config.queue_depth, "worker pool started");
        Ok(pool)
    }

    pub fn workers(&self) -> usize {
        self.queues.len()
    }

    /// Route `task` to the next worker. Blocks while that worker's queue is full.
    pub fn dispatch(&self, task: Task) -> Result<Ticket, PoolError> {
        let worker = self.next.fetch_add(1, Ordering::Relaxed) % self.queues.len();
        let (reply, rx) = bounded(1);

        self.queues[worker]
            .send(Job { task, reply })
            .map_err(|_| PoolError::Disconnected { worker })?;

        Ok(Ticket { worker, rx })
    }

    /// Close every queue, let queued tasks finish, and join all workers.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        self.queues.clear();
        for (index, handle) in self.handles.drain(..).enumerate() {
            if handle.join().is_err() {
                warn!(worker = index, "worker panicked");
            }
        }
        debug!("worker pool stopped");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.close();
    }
}
