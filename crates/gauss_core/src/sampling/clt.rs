//! Central-limit fallback sampler.
//!
//! Sums twelve pseudo-uniforms from a 64-bit xorshift generator and
//! subtracts six, giving an approximately standard normal variate with
//! support `(-6, 6)`. Only used when the quantile path degenerates.

use crate::constants::CLT_TERMS;
use crate::math::arithmetic::signed_sub;
use crate::types::{Result, SignedFixed, SCALE};

/// Marsaglia xorshift64 (13, 7, 17).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Seed the generator; a zero seed is replaced by one.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance and return the new state.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Next pseudo-uniform in `[1, SCALE - 2]`, scaled.
    #[inline]
    pub fn next_unit(&mut self) -> u128 {
        u128::from(self.next_u64()) % (SCALE - 2) + 1
    }
}

/// Approximate standard normal variate from a seed.
///
/// # Example
///
/// ```
/// use gauss_core::sampling::sample_clt;
///
/// let z = sample_clt(42).unwrap();
/// assert!(z.magnitude() < 6_000_000_000_000_000_000);
/// assert_eq!(z, sample_clt(42).unwrap());
/// ```
pub fn sample_clt(seed: u64) -> Result<SignedFixed> {
    let mut rng = Xorshift64::new(seed);
    let total: u128 = (0..CLT_TERMS).map(|_| rng.next_unit()).sum();
    signed_sub(
        SignedFixed::positive(total),
        SignedFixed::positive(CLT_TERMS as u128 * SCALE / 2),
    )
}
