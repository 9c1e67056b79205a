//! Worker-count configuration.

use std::env;

use crate::error::{Error, Result};

/// Environment variable consulted by [`Config::from_env`].
pub const THREADS_ENV: &str = "PAR_MATRIX_THREADS";

/// How many workers each operation spawns. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    threads: usize,
}

impl Config {
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(Error::InvalidThreadCount(threads));
        }
        Ok(Self { threads })
    }

    /// Reads `PAR_MATRIX_THREADS`, falling back to the host's available
    /// parallelism when it is unset.
    pub fn from_env() -> Result<Self> {
        match env::var(THREADS_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    fn parse(value: &str) -> Result<Self> {
        let threads = value
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::Env(value.to_string()))?;
        Self::new(threads)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Default for Config {
    fn default() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { threads }
    }
}
