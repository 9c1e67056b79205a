//! Parallel reductions: sum, trace, minimum, maximum, frequency.
//!
//! Each worker folds its range into a private accumulator. After join the
//! partials are folded on the caller thread with the same operator.

use crate::engine::Engine;
use crate::error::Result;
use crate::executor;
use crate::matrix::Matrix;

impl Engine {
    /// Folds every cell with `fold` per worker and `combine` across workers.
    ///
    /// An order 1 matrix is folded directly without spawning anything.
    fn reduce_cells<T, F, C>(
        &self,
        a: &Matrix,
        op: &'static str,
        fold: F,
        combine: C,
    ) -> Result<T>
    where
        T: Send,
        F: Fn(&[u32]) -> T + Sync,
        C: Fn(T, T) -> T,
    {
        let cells = a.as_slice();
        if a.order() == 1 {
            return Ok(fold(cells));
        }

        tracing::debug!(op, order = a.order(), threads = self.threads(), "reduce");
        let partials =
            executor::map_ranges(self.threads(), cells.len(), |range| fold(&cells[range]))?;

        let mut partials = partials.into_iter();
        // At least one worker always exists.
        let first = match partials.next() {
            Some(first) => first,
            None => return Ok(fold(&cells[..0])),
        };
        Ok(partials.fold(first, combine))
    }

    /// Sum of all cells, wrapping in `u64`.
    pub fn sum(&self, a: &Matrix) -> Result<u64> {
        if a.order() == 2 {
            let c = a.as_slice();
            return Ok(u64::from(c[0]) + u64::from(c[1]) + u64::from(c[2]) + u64::from(c[3]));
        }
        self.reduce_cells(a, "sum", sum_cells, u64::wrapping_add)
    }

    /// Sum of the main diagonal.
    ///
    /// The domain is the first half of the diagonal; index `i` also picks up
    /// its mirror `N-1-i`, and the centre of an odd order is counted once.
    pub fn trace(&self, a: &Matrix) -> Result<u64> {
        let n = a.order();
        let c = a.as_slice();
        match n {
            1 => return Ok(u64::from(c[0])),
            2 => return Ok(u64::from(c[0]) + u64::from(c[3])),
            _ => {}
        }

        tracing::debug!(order = n, threads = self.threads(), "trace");
        let partials = executor::map_ranges(self.threads(), n.div_ceil(2), |range| {
            range.fold(0u64, |acc, i| {
                let mirror = n - 1 - i;
                let acc = acc.wrapping_add(u64::from(c[i * n + i]));
                if mirror == i {
                    acc
                } else {
                    acc.wrapping_add(u64::from(c[mirror * n + mirror]))
                }
            })
        })?;
        Ok(partials.into_iter().fold(0, u64::wrapping_add))
    }

    pub fn min(&self, a: &Matrix) -> Result<u32> {
        self.reduce_cells(
            a,
            "min",
            |cells| cells.iter().copied().fold(u32::MAX, u32::min),
            u32::min,
        )
    }

    pub fn max(&self, a: &Matrix) -> Result<u32> {
        self.reduce_cells(
            a,
            "max",
            |cells| cells.iter().copied().fold(0, u32::max),
            u32::max,
        )
    }

    /// Number of cells equal to `value`.
    pub fn frequency(&self, a: &Matrix, value: u32) -> Result<usize> {
        self.reduce_cells(
            a,
            "frequency",
            |cells| cells.iter().filter(|&&v| v == value).count(),
            |x, y| x + y,
        )
    }
}

fn sum_cells(cells: &[u32]) -> u64 {
    cells
        .iter()
        .fold(0u64, |acc, &v| acc.wrapping_add(u64::from(v)))
}
