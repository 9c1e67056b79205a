//! Error types for par-matrix operations.

use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid matrix order {0}: order must be at least 1")]
    InvalidOrder(usize),

    #[error("invalid thread count {0}: at least one worker is required")]
    InvalidThreadCount(usize),

    #[error("matrix order mismatch: left is {0}x{0}, right is {1}x{1}")]
    OrderMismatch(usize, usize),

    #[error("buffer holds {len} cells, order {order} needs {expected}")]
    BufferLength {
        order: usize,
        len: usize,
        expected: usize,
    },

    #[error("order {0} overflows the addressable cell count")]
    OrderTooLarge(usize),

    #[error("cannot allocate {0} matrix cells")]
    Allocation(usize, #[source] TryReserveError),

    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("invalid PAR_MATRIX_THREADS value {0:?}")]
    Env(String),
}
