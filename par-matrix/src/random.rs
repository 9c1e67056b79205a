//! Linear congruential generator behind [`Matrix::random`](crate::Matrix::random).

const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;

/// 32-bit LCG yielding 15-bit values, matching the classic `rand()` constants
/// so seeded matrices are reproducible across platforms.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) & 0x7FFF
    }
}
