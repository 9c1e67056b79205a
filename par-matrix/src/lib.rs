//! Dense square-matrix arithmetic split across worker threads.
//!
//! `par-matrix` operates on square matrices of `u32` cells stored row-major
//! in a single buffer. Every operation on [`Engine`] partitions its work into
//! one contiguous range per worker, spawns that many scoped threads, and
//! joins them before returning.
//!
//! # Work Partitioning
//!
//! - **Elementwise** (clone, fill, scalar add/mul, add, reverse, transpose):
//!   the cell domain `[0, N·N)`, one disjoint output slice per worker.
//! - **Multiply**: the row domain `[0, N)`, one disjoint block of rows per
//!   worker.
//! - **Power**: the `e` factors of `Aᵉ`, one partial power per worker,
//!   folded on the caller thread.
//! - **Reductions** (sum, trace, min, max, frequency): private per-worker
//!   accumulators folded after join.
//!
//! All arithmetic wraps modulo 2^32, so results are identical for every
//! worker count.
//!
//! # Example
//!
//! ```
//! use par_matrix::{Config, Engine, Matrix};
//!
//! let engine = Engine::new(Config::new(4)?);
//!
//! let a = Matrix::from_rows(&[[1u32, 2], [3, 4]])?;
//! let shifted = engine.scalar_add(&a, 4)?;
//! assert_eq!(shifted.as_slice(), &[5, 6, 7, 8]);
//!
//! let p = engine.power(&a, 4)?;
//! assert_eq!(p.as_slice(), &[199, 290, 435, 634]);
//! assert_eq!(engine.trace(&p)?, 833);
//! # Ok::<(), par_matrix::Error>(())
//! ```

mod config;
mod elementwise;
mod engine;
mod error;
mod executor;
mod matrix;
mod multiply;
pub mod partition;
mod power;
mod random;
mod reduce;

pub use config::{Config, THREADS_ENV};
pub use engine::Engine;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use random::Lcg;
