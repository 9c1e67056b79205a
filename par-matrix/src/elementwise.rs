//! Parallel maps over the element domain `[0, N·N)`.
//!
//! Each worker owns a disjoint slice of the output and only reads the
//! source buffers, so the join is the only synchronization.

use crate::engine::{Engine, check_same_order};
use crate::error::Result;
use crate::executor;
use crate::matrix::Matrix;

impl Engine {
    /// Builds a new matrix of `order` where cell `i` is `f(i)`.
    fn map_cells<F>(&self, order: usize, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(usize) -> u32 + Sync,
    {
        let mut out = Matrix::zeros(order)?;
        tracing::debug!(op, order, threads = self.threads(), "elementwise");

        executor::fill_ranges(self.threads(), out.cells_mut(), 1, |range, cells| {
            for (i, cell) in range.zip(cells.iter_mut()) {
                *cell = f(i);
            }
        })?;
        Ok(out)
    }

    /// Copy of `a` in a new buffer.
    pub fn clone_matrix(&self, a: &Matrix) -> Result<Matrix> {
        let src = a.as_slice();
        self.map_cells(a.order(), "clone", |i| src[i])
    }

    /// Matrix with every cell set to `value`.
    pub fn uniform(&self, order: usize, value: u32) -> Result<Matrix> {
        self.map_cells(order, "uniform", |_| value)
    }

    /// Row-major arithmetic sequence: cell `i` is `start + i·step`, wrapping.
    pub fn sequence(&self, order: usize, start: u32, step: u32) -> Result<Matrix> {
        self.map_cells(order, "sequence", |i| {
            start.wrapping_add(step.wrapping_mul(i as u32))
        })
    }

    pub fn scalar_add(&self, a: &Matrix, scalar: u32) -> Result<Matrix> {
        let src = a.as_slice();
        self.map_cells(a.order(), "scalar_add", |i| src[i].wrapping_add(scalar))
    }

    pub fn scalar_mul(&self, a: &Matrix, scalar: u32) -> Result<Matrix> {
        let src = a.as_slice();
        self.map_cells(a.order(), "scalar_mul", |i| src[i].wrapping_mul(scalar))
    }

    /// Cell-wise sum. Both operands must have the same order.
    pub fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_same_order(a, b)?;
        let (lhs, rhs) = (a.as_slice(), b.as_slice());
        self.map_cells(a.order(), "add", |i| lhs[i].wrapping_add(rhs[i]))
    }

    /// Reverses the flat cell order; cell `i` takes cell `N·N - 1 - i`.
    ///
    /// This is not a geometric flip, although for square matrices it
    /// coincides with a 180 degree rotation.
    pub fn reverse(&self, a: &Matrix) -> Result<Matrix> {
        let src = a.as_slice();
        let last = src.len() - 1;
        self.map_cells(a.order(), "reverse", |i| src[last - i])
    }

    pub fn transpose(&self, a: &Matrix) -> Result<Matrix> {
        let src = a.as_slice();
        let n = a.order();
        self.map_cells(n, "transpose", |i| src[(i % n) * n + i / n])
    }
}
