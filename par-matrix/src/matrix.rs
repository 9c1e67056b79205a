//! Square `u32` matrix stored row-major in one owned buffer.

use std::fmt;

use crate::error::{Error, Result};
use crate::random::Lcg;

/// A square matrix of order `N` holding `N·N` cells, `cell(row, col)` at
/// index `row·N + col`. The buffer is never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    order: usize,
    cells: Vec<u32>,
}

impl Matrix {
    /// Matrix of the given order with every cell zero.
    pub fn zeros(order: usize) -> Result<Self> {
        Ok(Self {
            order,
            cells: alloc_cells(order)?,
        })
    }

    pub fn identity(order: usize) -> Result<Self> {
        let mut matrix = Self::zeros(order)?;
        for i in 0..order {
            matrix.cells[i * order + i] = 1;
        }
        Ok(matrix)
    }

    /// Fills cells in row-major order from an LCG seeded with `seed`.
    ///
    /// Values are in `[0, 0x7FFF]` and the sequence is the same for a given
    /// seed on every run.
    pub fn random(order: usize, seed: u32) -> Result<Self> {
        let mut matrix = Self::zeros(order)?;
        let mut rng = Lcg::new(seed);
        for cell in matrix.cells.iter_mut() {
            *cell = rng.next_value();
        }
        Ok(matrix)
    }

    /// Wraps an existing row-major buffer.
    pub fn from_vec(order: usize, cells: Vec<u32>) -> Result<Self> {
        let expected = cell_count(order)?;
        if cells.len() != expected {
            return Err(Error::BufferLength {
                order,
                len: cells.len(),
                expected,
            });
        }
        Ok(Self { order, cells })
    }

    /// Builds a matrix from nested rows; every row must have `rows.len()` cells.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let order = rows.len();
        let mut cells = Vec::with_capacity(cell_count(order)?);
        for row in rows {
            let row = row.as_ref();
            if row.len() != order {
                return Err(Error::BufferLength {
                    order,
                    len: row.len(),
                    expected: order,
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_vec(order, cells)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.order && col < self.order {
            Some(self.cells[row * self.order + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u32]> {
        let start = row.checked_mul(self.order)?;
        let end = start.checked_add(self.order)?;
        self.cells.get(start..end)
    }

    pub fn column(&self, col: usize) -> Option<Vec<u32>> {
        if col >= self.order {
            return None;
        }
        Some(
            self.cells
                .iter()
                .skip(col)
                .step_by(self.order)
                .copied()
                .collect(),
        )
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.order)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }
}

impl fmt::Display for Matrix {
    /// One row per line, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn cell_count(order: usize) -> Result<usize> {
    if order == 0 {
        return Err(Error::InvalidOrder(order));
    }
    order.checked_mul(order).ok_or(Error::OrderTooLarge(order))
}

fn alloc_cells(order: usize) -> Result<Vec<u32>> {
    let len = cell_count(order)?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|e| Error::Allocation(len, e))?;
    cells.resize(len, 0);
    Ok(cells)
}
