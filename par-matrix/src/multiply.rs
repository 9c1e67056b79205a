//! Row-partitioned dense multiplication.

use crate::engine::{Engine, check_same_order};
use crate::error::Result;
use crate::executor;
use crate::matrix::Matrix;

impl Engine {
    /// `C = A × B` with `C[y][x] = Σ_k A[y][k]·B[k][x]`.
    ///
    /// The row domain `[0, N)` is partitioned, so each worker computes every
    /// column of its own rows and writes only those rows of `C`.
    ///
    /// Products are exact in `u64` and accumulated with wrapping, then
    /// truncated: results are `A × B` modulo 2^32. Wider values are not
    /// representable in a `u32` matrix.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_same_order(a, b)?;

        let n = a.order();
        let mut out = Matrix::zeros(n)?;
        let (lhs, rhs) = (a.as_slice(), b.as_slice());
        tracing::debug!(order = n, threads = self.threads(), "multiply");

        executor::fill_ranges(self.threads(), out.cells_mut(), n, |rows, cells| {
            // i-k-j order: B is walked row by row.
            let mut acc = vec![0u64; n];
            for (y, out_row) in rows.zip(cells.chunks_mut(n)) {
                acc.fill(0);
                let a_row = &lhs[y * n..(y + 1) * n];
                for (k, &a_yk) in a_row.iter().enumerate() {
                    if a_yk == 0 {
                        continue;
                    }
                    let b_row = &rhs[k * n..(k + 1) * n];
                    for (sum, &b_kx) in acc.iter_mut().zip(b_row) {
                        *sum = sum.wrapping_add(u64::from(a_yk) * u64::from(b_kx));
                    }
                }
                for (cell, &sum) in out_row.iter_mut().zip(acc.iter()) {
                    *cell = sum as u32;
                }
            }
        })?;
        Ok(out)
    }
}
