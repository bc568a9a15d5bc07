//! Inverse cumulative distribution (quantile function).
//!
//! The quantile is computed in two stages:
//!
//! 1. An initial estimate from one of three regions:
//!    - central (`0.02 <= p <= 0.98`): a rational function of `p`
//!    - lower tail (`p < 0.02`): a rational function of `t = sqrt(-2 ln p)`,
//!      negated
//!    - upper tail (`p > 0.98`): the lower-tail estimate of `1 - p`, positive
//! 2. A fixed number of Newton steps on `Φ(z) - p` using `φ(z)` as the
//!    derivative (see [`NewtonRefiner`]).
//!
//! Beyond `|z| = 6` the density is reported as zero, so tail estimates past
//! that point bypass refinement and the quantile can reach about `±6.36` at
//! the ends of the sampling interval.

use std::fmt;

use tracing::debug;

use super::forward::{cdf, pdf};
use crate::coefficients::{PPF_CENTRAL, PPF_TAIL};
use crate::constants::{EPS, P_HIGH, P_LOW};
use crate::math::arithmetic::signed_sub;
use crate::math::solvers::{NewtonRefiner, RefinementConfig};
use crate::math::special::{ln_fixed, sqrt_fixed};
use crate::types::{GaussError, Result, SignedFixed, SCALE};

/// Smallest probability accepted by [`ppf`].
pub const PPF_MIN: u128 = EPS;

/// Largest probability accepted by [`ppf`].
pub const PPF_MAX: u128 = SCALE - EPS;

/// Approximation region selected for a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Region {
    /// `p < 0.02`.
    LowerTail,
    /// `0.02 <= p <= 0.98`.
    Central,
    /// `p > 0.98`.
    UpperTail,
}

impl Region {
    /// Region for a scaled probability.
    ///
    /// ```
    /// use gauss_core::distribution::Region;
    /// use gauss_core::types::SCALE;
    ///
    /// assert_eq!(Region::classify(SCALE / 2), Region::Central);
    /// assert_eq!(Region::classify(SCALE / 100), Region::LowerTail);
    /// assert_eq!(Region::classify(SCALE - SCALE / 100), Region::UpperTail);
    /// ```
    pub fn classify(p: u128) -> Self {
        if p < P_LOW {
            Region::LowerTail
        } else if p > P_HIGH {
            Region::UpperTail
        } else {
            Region::Central
        }
    }

    /// True for either tail.
    pub fn is_tail(self) -> bool {
        self != Region::Central
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::LowerTail => "lower_tail",
            Region::Central => "central",
            Region::UpperTail => "upper_tail",
        };
        f.write_str(name)
    }
}

fn ensure_in_domain(p: u128) -> Result<()> {
    if !(PPF_MIN..=PPF_MAX).contains(&p) {
        return Err(GaussError::ProbabilityOutOfDomain {
            p,
            min: PPF_MIN,
            max: PPF_MAX,
        });
    }
    Ok(())
}

/// Positive tail magnitude for a lower-tail probability.
fn tail_magnitude(p: u128) -> Result<SignedFixed> {
    let log = ln_fixed(p)?;
    let doubled = log
        .magnitude()
        .checked_mul(2)
        .ok_or(GaussError::ArithmeticOverflow("tail_magnitude"))?;
    let t = sqrt_fixed(doubled)?;
    PPF_TAIL.evaluate(t)
}

/// Unrefined quantile estimate for `0 < p < 1`.
///
/// # Errors
///
/// Returns [`GaussError::NonPositiveLogarithm`] for `p == 0` and may
/// underflow the upper tail for `p >= SCALE`; use [`ppf`] for validated input.
pub fn initial_estimate(p: u128) -> Result<SignedFixed> {
    match Region::classify(p) {
        Region::Central => PPF_CENTRAL.evaluate(p),
        Region::LowerTail => Ok(-tail_magnitude(p)?),
        Region::UpperTail => {
            let complement = SCALE
                .checked_sub(p)
                .ok_or(GaussError::ArithmeticOverflow("initial_estimate"))?;
            tail_magnitude(complement)
        }
    }
}

/// Quantile with an explicit refinement configuration.
///
/// # Errors
///
/// - [`GaussError::ProbabilityOutOfDomain`] unless `EPS <= p <= SCALE - EPS`
/// - [`GaussError::InvalidConfig`] if `config` fails validation
pub fn ppf_with(p: u128, config: &RefinementConfig) -> Result<SignedFixed> {
    ensure_in_domain(p)?;
    config.validate()?;

    let region = Region::classify(p);
    let estimate = initial_estimate(p)?;
    debug!(p, %region, %estimate, "quantile estimate");

    let target = SignedFixed::positive(p);
    let refiner = NewtonRefiner::new(*config);
    refiner.refine(
        |z| signed_sub(SignedFixed::positive(cdf(z)?), target),
        pdf,
        estimate,
    )
}

/// Standard normal quantile `Φ⁻¹(p)`.
///
/// # Arguments
///
/// * `p` - scaled probability in `[EPS, SCALE - EPS]`
///
/// # Errors
///
/// Returns [`GaussError::ProbabilityOutOfDomain`] outside that interval.
///
/// # Example
///
/// ```
/// use gauss_core::distribution::ppf;
/// use gauss_core::types::SCALE;
///
/// let z = ppf(975 * SCALE / 1000).unwrap();
/// assert!((z.to_f64() - 1.959963984540054).abs() < 1e-9);
/// assert!(ppf(0).is_err());
/// ```
pub fn ppf(p: u128) -> Result<SignedFixed> {
    ppf_with(p, &RefinementConfig::default())
}

/// Like [`ppf`], but returns `None` instead of an error.
pub fn checked_ppf(p: u128) -> Option<SignedFixed> {
    ppf(p).ok()
}
