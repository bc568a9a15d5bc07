//! Single-use sampling guard.
//!
//! A [`SamplerGuard`] authorises exactly one successful draw. The check
//! happens before any validation or computation and the guard is only
//! consumed once a value has been produced, so a rejected request (bad
//! standard deviation, arithmetic failure) leaves it usable.

use tracing::warn;

use super::sampler::{apply_mean_std, ensure_positive_std, sample};
use crate::types::{GaussError, Result, SignedFixed};

/// One-shot authorisation for a sample.
///
/// # Example
///
/// ```
/// use gauss_core::sampling::SamplerGuard;
/// use gauss_core::types::GaussError;
///
/// let mut guard = SamplerGuard::new();
/// assert!(guard.sample(42).is_ok());
/// assert_eq!(guard.sample(42), Err(GaussError::GuardAlreadyUsed));
/// assert!(guard.is_used());
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SamplerGuard {
    used: bool,
}

impl SamplerGuard {
    /// A fresh, unused guard.
    pub fn new() -> Self {
        Self { used: false }
    }

    /// True once a draw has succeeded against this guard.
    pub fn is_used(&self) -> bool {
        self.used
    }

    fn ensure_fresh(&self) -> Result<()> {
        if self.used {
            warn!("sampler guard presented twice");
            return Err(GaussError::GuardAlreadyUsed);
        }
        Ok(())
    }

    /// Standard normal draw, consuming the guard on success.
    pub fn sample(&mut self, entropy: u64) -> Result<SignedFixed> {
        self.ensure_fresh()?;
        let z = sample(entropy)?;
        self.used = true;
        Ok(z)
    }

    /// Affine normal draw, consuming the guard on success.
    ///
    /// # Errors
    ///
    /// - [`GaussError::GuardAlreadyUsed`] if the guard was consumed,
    ///   regardless of the other arguments
    /// - [`GaussError::InvalidStdDev`] unless `std_dev > 0`; the guard is
    ///   left unused
    pub fn sample_normal(
        &mut self,
        entropy: u64,
        mean: SignedFixed,
        std_dev: SignedFixed,
    ) -> Result<SignedFixed> {
        self.sample_normal_parts(entropy, mean, std_dev).map(|(_, x)| x)
    }

    /// Affine draw returning the standard variate alongside the scaled
    /// value. Same guard rules as [`SamplerGuard::sample_normal`].
    pub(crate) fn sample_normal_parts(
        &mut self,
        entropy: u64,
        mean: SignedFixed,
        std_dev: SignedFixed,
    ) -> Result<(SignedFixed, SignedFixed)> {
        self.ensure_fresh()?;
        ensure_positive_std(std_dev)?;
        let z = sample(entropy)?;
        let x = apply_mean_std(z, mean, std_dev)?;
        self.used = true;
        Ok((z, x))
    }
}

/// Free-function form of [`SamplerGuard::sample`].
pub fn sample_guarded(guard: &mut SamplerGuard, entropy: u64) -> Result<SignedFixed> {
    guard.sample(entropy)
}

/// Free-function form of [`SamplerGuard::sample_normal`].
pub fn sample_normal_guarded(
    guard: &mut SamplerGuard,
    entropy: u64,
    mean: SignedFixed,
    std_dev: SignedFixed,
) -> Result<SignedFixed> {
    guard.sample_normal(entropy, mean, std_dev)
}
