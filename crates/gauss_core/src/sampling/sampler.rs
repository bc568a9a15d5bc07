//! Standard and affine normal sampling from entropy.

use tracing::debug;

use super::clt::sample_clt;
use super::entropy::EntropySource;
use super::uniform::uniform_open_interval;
use crate::distribution::{ppf, Region};
use crate::math::arithmetic::{mul_fixed, signed_add};
use crate::types::{GaussError, Result, SignedFixed};

/// True when a quantile of exactly zero cannot be genuine.
///
/// Only the central region brackets the median, so a zero quantile from a
/// tail probability signals a degenerate evaluation.
pub(crate) fn is_degenerate(z: SignedFixed, p: u128) -> bool {
    z.is_zero() && Region::classify(p).is_tail()
}

/// Standard normal variate from 64 bits of entropy.
///
/// Maps `entropy` onto `(0, 1)` with [`uniform_open_interval`], then applies
/// the quantile. If the quantile degenerates to zero for a tail probability,
/// the central-limit sampler seeded with the same entropy is used instead.
///
/// # Example
///
/// ```
/// use gauss_core::sampling::sample;
///
/// let z = sample(1 << 63).unwrap();
/// assert!(z.magnitude() < 1_000_000);
/// assert_eq!(sample(12345).unwrap(), sample(12345).unwrap());
/// ```
pub fn sample(entropy: u64) -> Result<SignedFixed> {
    let p = uniform_open_interval(entropy);
    let z = ppf(p)?;
    if is_degenerate(z, p) {
        debug!(entropy, p, "degenerate quantile, using central-limit fallback");
        return sample_clt(entropy);
    }
    Ok(z)
}

/// `mean + std_dev * z`, with the product truncated toward zero.
pub fn apply_mean_std(
    z: SignedFixed,
    mean: SignedFixed,
    std_dev: SignedFixed,
) -> Result<SignedFixed> {
    let delta = SignedFixed::new(
        mul_fixed(std_dev.magnitude(), z.magnitude())?,
        z.is_negative() != std_dev.is_negative(),
    );
    signed_add(mean, delta)
}

pub(crate) fn ensure_positive_std(std_dev: SignedFixed) -> Result<()> {
    if std_dev.is_zero() || std_dev.is_negative() {
        return Err(GaussError::InvalidStdDev(std_dev));
    }
    Ok(())
}

/// Normal variate with the given mean and standard deviation.
///
/// # Errors
///
/// Returns [`GaussError::InvalidStdDev`] unless `std_dev > 0`.
///
/// # Example
///
/// ```
/// use gauss_core::sampling::sample_normal;
/// use gauss_core::types::SignedFixed;
///
/// let mean = SignedFixed::from_integer(10);
/// let std_dev = SignedFixed::from_integer(2);
/// let x = sample_normal(1 << 63, mean, std_dev).unwrap();
/// assert!(x.magnitude().abs_diff(mean.magnitude()) < 1_000_000);
/// assert!(sample_normal(0, mean, SignedFixed::ZERO).is_err());
/// ```
pub fn sample_normal(
    entropy: u64,
    mean: SignedFixed,
    std_dev: SignedFixed,
) -> Result<SignedFixed> {
    ensure_positive_std(std_dev)?;
    let z = sample(entropy)?;
    apply_mean_std(z, mean, std_dev)
}

/// Draw one standard normal variate from an entropy source.
pub fn sample_from<S: EntropySource + ?Sized>(source: &mut S) -> Result<SignedFixed> {
    sample(source.next_entropy())
}

/// Draw `count` standard normal variates from an entropy source.
pub fn sample_many<S: EntropySource + ?Sized>(
    source: &mut S,
    count: usize,
) -> Result<Vec<SignedFixed>> {
    (0..count).map(|_| sample_from(&mut *source)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EPS, P_HIGH, P_LOW};
    use crate::sampling::SeededEntropy;
    use crate::types::SCALE;

    #[test]
    fn test_extreme_entropy() {
        let low = sample(0).unwrap();
        assert_eq!(low, SignedFixed::negative(6_361_340_900_868_293_720));
        let high = sample(u64::MAX).unwrap();
        assert!(!high.is_negative());
        assert!(high.magnitude() > 6 * SCALE);
    }

    #[test]
    fn test_deterministic() {
        for entropy in [1u64, 77, 1 << 40, u64::MAX / 3] {
            assert_eq!(sample(entropy).unwrap(), sample(entropy).unwrap());
        }
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(is_degenerate(SignedFixed::ZERO, EPS));
        assert!(is_degenerate(SignedFixed::ZERO, P_HIGH + 1));
        assert!(!is_degenerate(SignedFixed::ZERO, SCALE / 2));
        assert!(!is_degenerate(SignedFixed::ZERO, P_LOW));
        assert!(!is_degenerate(SignedFixed::ONE, EPS));
    }

    #[test]
    fn test_apply_mean_std() {
        let z = SignedFixed::negative(3 * SCALE / 2);
        let mean = SignedFixed::from_integer(10);
        let std_dev = SignedFixed::from_integer(2);
        assert_eq!(
            apply_mean_std(z, mean, std_dev).unwrap(),
            SignedFixed::from_integer(7)
        );
        let negative_mean = SignedFixed::from_integer(-1);
        assert_eq!(
            apply_mean_std(SignedFixed::ONE, negative_mean, std_dev).unwrap(),
            SignedFixed::ONE
        );
    }

    #[test]
    fn test_sample_normal_midpoint() {
        let mean = SignedFixed::from_integer(10);
        let std_dev = SignedFixed::from_integer(2);
        let x = sample_normal(1 << 63, mean, std_dev).unwrap();
        assert_eq!(x, SignedFixed::positive(10 * SCALE + 4));
    }

    #[test]
    fn test_sample_normal_rejects_non_positive_std() {
        let mean = SignedFixed::ZERO;
        for std_dev in [SignedFixed::ZERO, SignedFixed::from_integer(-1)] {
            assert_eq!(
                sample_normal(5, mean, std_dev),
                Err(GaussError::InvalidStdDev(std_dev))
            );
        }
    }

    #[test]
    fn test_sample_many_matches_sequential_draws() {
        let mut a = SeededEntropy::from_seed(5);
        let mut b = SeededEntropy::from_seed(5);
        let batch = sample_many(&mut a, 8).unwrap();
        let single: Vec<SignedFixed> = (0..8).map(|_| sample_from(&mut b).unwrap()).collect();
        assert_eq!(batch, single);
    }
}
