use crossbeam::channel::{Receiver, Sender};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::config::ConfigError;
use crate::types::{DecryptError, EnvelopeError};

/// One independent unit of work. Secrets are wiped when the task is dropped.
pub enum Task {
    Encrypt { plaintext: Zeroizing<String>, password: Zeroizing<String> },
    Decrypt { envelope: String, password: Zeroizing<String> },
}

impl Task {
    pub fn encrypt(plaintext: impl Into<String>, password: impl Into<String>) -> Self {
        Task::Encrypt {
            plaintext: Zeroizing::new(plaintext.into()),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn decrypt(envelope: impl Into<String>, password: impl Into<String>) -> Self {
        Task::Decrypt { envelope: envelope.into(), password: Zeroizing::new(password.into()) }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Task::Encrypt { .. } => "encrypt",
            Task::Decrypt { .. } => "decrypt",
        }
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task::{}([REDACTED])", self.name())
    }
}

/// Result relayed back through a `Ticket`.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("encrypt failed: {0}")]
    Encrypt(EnvelopeError),

    /// Still opaque: the pool relays the same single failure signal.
    #[error(transparent)]
    Decrypt(DecryptError),

    /// Worker exited before replying.
    #[error("worker exited before replying")]
    WorkerGone,
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("pool config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn worker {worker}: {msg}")]
    Spawn { worker: usize, msg: String },

    #[error("worker {worker} queue disconnected")]
    Disconnected { worker: usize },
}

/// Reply sender paired with a task on a worker queue.
pub(crate) struct Job {
    pub task: Task,
    pub reply: Sender<Result<String, TaskError>>,
}

/// Handle to one dispatched task.
#[derive(Debug)]
pub struct Ticket {
    pub(crate) worker: usize,
    pub(crate) rx: Receiver<Result<String, TaskError>>,
}

impl Ticket {
    /// Index of the worker the task was routed to.
    pub fn worker(&self) -> usize {
        self.worker
    }

    /// Block until the worker replies.
    pub fn wait(self) -> Result<String, TaskError> {
        self.rx.recv().unwrap_or(Err(TaskError::WorkerGone))
    }
}
