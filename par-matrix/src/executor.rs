//! Fork/join execution over partitioned domains.
//!
//! Every call spawns exactly one scoped OS thread per configured worker,
//! binds each to a [`WorkRange`], and joins all of them before returning.
//! There is no persistent pool; thread creation is paid per call.
//!
//! Workers either write into disjoint `&mut` slices of one output buffer
//! ([`fill_ranges`]) or return a private partial result ([`map_ranges`]).
//! Neither path takes a lock.

use std::thread::{self, Scope, ScopedJoinHandle};

use crate::error::{Error, Result};
use crate::partition::{self, WorkRange};

/// Runs `f` once per worker over its range of `[0, domain)` and returns the
/// partial results in worker order.
pub fn map_ranges<T, F>(workers: usize, domain: usize, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(WorkRange) -> T + Sync,
{
    let f = &f;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_error = None;

        for (worker, range) in partition::plan(domain, workers).into_iter().enumerate() {
            match spawn_worker(scope, worker, move || {
                tracing::trace!(
                    worker,
                    start = range.start,
                    end = range.end,
                    "worker started"
                );
                f(range)
            }) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        finish(handles, spawn_error)
    })
}

/// Splits `out` into per-worker slices and runs `f` on each in parallel.
///
/// The domain is `out.len() / stride` units of `stride` cells each, e.g.
/// `stride = 1` for the element domain and `stride = order` for rows. Each
/// worker receives its range in domain units and exactly the cells that
/// range covers.
pub fn fill_ranges<F>(workers: usize, out: &mut [u32], stride: usize, f: F) -> Result<()>
where
    F: Fn(WorkRange, &mut [u32]) + Sync,
{
    debug_assert!(stride > 0 && out.len() % stride == 0);

    let domain = out.len() / stride;
    let f = &f;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_error = None;
        let mut remaining = out;

        for (worker, range) in partition::plan(domain, workers).into_iter().enumerate() {
            let (cells, rest) = remaining.split_at_mut(range.len() * stride);
            remaining = rest;

            match spawn_worker(scope, worker, move || {
                tracing::trace!(
                    worker,
                    start = range.start,
                    end = range.end,
                    "worker started"
                );
                f(range, cells)
            }) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        finish(handles, spawn_error).map(|_| ())
    })
}

fn spawn_worker<'scope, T, F>(
    scope: &'scope Scope<'scope, '_>,
    worker: usize,
    body: F,
) -> Result<ScopedJoinHandle<'scope, T>>
where
    T: Send + 'scope,
    F: FnOnce() -> T + Send + 'scope,
{
    thread::Builder::new()
        .name(format!("par-matrix-{worker}"))
        .spawn_scoped(scope, body)
        .map_err(|source| {
            tracing::warn!(worker, error = %source, "failed to spawn worker");
            Error::Spawn { worker, source }
        })
}

// Joins every handle that was spawned, even after a spawn failure, so no
// worker outlives the call and a spawn error still wins over join errors.
fn finish<T>(handles: Vec<ScopedJoinHandle<'_, T>>, spawn_error: Option<Error>) -> Result<Vec<T>> {
    let mut partials = Vec::with_capacity(handles.len());
    let mut failure = spawn_error;

    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(partial) => partials.push(partial),
            Err(_) => {
                tracing::warn!(worker, "worker panicked");
                failure.get_or_insert(Error::WorkerPanicked(worker));
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(partials),
    }
}
