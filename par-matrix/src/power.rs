//! Exponentiation on top of the multiply engine.
//!
//! The `e` factors of `Aᵉ` are split over the workers with the same planner
//! used for cells and rows. Worker `t` raises `A` to the size of its range,
//! multiplying with a reduced worker budget so the nested multiplies do not
//! oversubscribe the host. Partial powers stay owned by their worker until
//! join; the caller thread then folds them in worker order. No buffer is
//! shared between workers, so there is nothing to lock.

use crate::engine::Engine;
use crate::error::Result;
use crate::executor;
use crate::matrix::Matrix;

impl Engine {
    /// `Aᵉ`. `e = 0` gives the identity of `A`'s order and `e = 1` a copy.
    ///
    /// Arithmetic is modulo 2^32 like [`Engine::multiply`], which keeps the
    /// result bit-identical for every worker count.
    pub fn power(&self, a: &Matrix, exponent: u32) -> Result<Matrix> {
        match exponent {
            0 => return Matrix::identity(a.order()),
            1 => return self.clone_matrix(a),
            _ => {}
        }

        let threads = self.threads();
        let factors = exponent as usize;
        let busy = threads.min(factors);
        let inner = self.with_threads(threads / busy);
        tracing::debug!(
            order = a.order(),
            exponent,
            threads,
            busy,
            inner_threads = inner.threads(),
            "power"
        );

        let partials = executor::map_ranges(threads, factors, |copies| {
            if copies.is_empty() {
                return Ok(None);
            }
            inner.power_by_squaring(a, copies.len() as u32).map(Some)
        })?;

        let mut product: Option<Matrix> = None;
        for partial in partials {
            let Some(partial) = partial? else {
                continue;
            };
            product = Some(match product {
                Some(acc) => self.multiply(&acc, &partial)?,
                None => partial,
            });
        }

        match product {
            Some(product) => Ok(product),
            None => Matrix::identity(a.order()),
        }
    }

    fn power_by_squaring(&self, a: &Matrix, mut exponent: u32) -> Result<Matrix> {
        let mut base = a.clone();
        let mut acc: Option<Matrix> = None;

        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = Some(match acc {
                    Some(acc) => self.multiply(&acc, &base)?,
                    None => base.clone(),
                });
            }
            exponent >>= 1;
            if exponent > 0 {
                base = self.multiply(&base, &base)?;
            }
        }

        match acc {
            Some(acc) => Ok(acc),
            None => Matrix::identity(a.order()),
        }
    }
}
