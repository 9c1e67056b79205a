//! Entry point for every parallel matrix operation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Runs matrix operations with the worker count from its [`Config`].
///
/// The engine holds no matrices and no threads between calls. Each
/// operation reads the current worker count, spawns that many workers,
/// joins them, and returns a freshly allocated result. Inputs are never
/// mutated.
///
/// # Example
///
/// ```
/// use par_matrix::{Config, Engine, Matrix};
///
/// let engine = Engine::new(Config::new(4)?);
/// let a = Matrix::from_rows(&[[1u32, 2], [3, 4]])?;
/// let b = Matrix::from_rows(&[[5u32, 6], [7, 8]])?;
///
/// let c = engine.multiply(&a, &b)?;
/// assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
/// # Ok::<(), par_matrix::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn threads(&self) -> usize {
        self.config.threads()
    }

    /// Replaces the worker count used by subsequent calls.
    pub fn set_threads(&mut self, threads: usize) -> Result<()> {
        self.config = Config::new(threads)?;
        Ok(())
    }

    /// Engine sharing nothing with `self` but a smaller worker budget.
    pub(crate) fn with_threads(&self, threads: usize) -> Self {
        Self {
            config: Config::new(threads.max(1)).unwrap_or(self.config),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

pub(crate) fn check_same_order(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.order() != b.order() {
        return Err(Error::OrderMismatch(a.order(), b.order()));
    }
    Ok(())
}
