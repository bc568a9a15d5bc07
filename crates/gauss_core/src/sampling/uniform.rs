//! Mapping raw entropy onto the open unit interval.

use crate::constants::EPS;
use crate::types::SCALE;

/// Number of probabilities strictly between `EPS` and `SCALE - EPS`.
pub const UNIFORM_SPAN: u128 = SCALE - 2 * EPS - 1;

/// Map 64 bits of entropy to a probability in the open interval
/// `(EPS, SCALE - EPS)`.
///
/// Computes `EPS + 1 + floor(entropy * span / 2^64)` in 128-bit arithmetic,
/// so the mapping is monotone in `entropy` and the smallest and largest
/// words land one unit inside the quantile's domain.
///
/// # Example
///
/// ```
/// use gauss_core::sampling::uniform_open_interval;
/// use gauss_core::constants::EPS;
/// use gauss_core::types::SCALE;
///
/// assert_eq!(uniform_open_interval(0), EPS + 1);
/// assert_eq!(uniform_open_interval(1 << 63), SCALE / 2);
/// assert!(uniform_open_interval(u64::MAX) < SCALE - EPS);
/// ```
#[inline]
pub fn uniform_open_interval(entropy: u64) -> u128 {
    ((u128::from(entropy) * UNIFORM_SPAN) >> 64) + EPS + 1
}
