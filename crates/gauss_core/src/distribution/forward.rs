//! Forward functions: cumulative distribution, density and error function.

use crate::coefficients::{CDF, PDF};
use crate::constants::{MAX_Z, SQRT_2};
use crate::math::arithmetic::{clamp_unit, mul_fixed};
use crate::types::{Result, SignedFixed, SCALE};

/// Standard normal cumulative distribution `Φ(z)`, scaled.
///
/// The rational approximation is evaluated at `min(|z|, 6)`; negative
/// arguments use the reflection `Φ(-x) = 1 - Φ(x)`. The result always lies
/// in `[0, SCALE]` and is exactly `SCALE / 2` at zero.
///
/// # Errors
///
/// Returns [`GaussError::DenominatorZero`](crate::types::GaussError::DenominatorZero)
/// if the approximation's denominator vanishes, which the shipped tables do
/// not do on `[0, 6]`.
///
/// # Example
///
/// ```
/// use gauss_core::distribution::cdf;
/// use gauss_core::types::{SignedFixed, SCALE};
///
/// assert_eq!(cdf(SignedFixed::ZERO).unwrap(), SCALE / 2);
/// let upper = cdf("1.96".parse().unwrap()).unwrap();
/// let lower = cdf("-1.96".parse().unwrap()).unwrap();
/// assert_eq!(upper + lower, SCALE);
/// ```
pub fn cdf(z: SignedFixed) -> Result<u128> {
    let x = z.magnitude().min(MAX_Z);
    let value = CDF.evaluate(x)?;
    let upper = if value.is_negative() {
        0
    } else {
        clamp_unit(value.magnitude())
    };
    Ok(if z.is_negative() { SCALE - upper } else { upper })
}

/// Standard normal density `φ(z)`, scaled.
///
/// Zero for `|z| > 6`; otherwise the rational approximation at `|z|`,
/// floored at zero.
pub fn pdf(z: SignedFixed) -> Result<u128> {
    let x = z.magnitude();
    if x > MAX_Z {
        return Ok(0);
    }
    let value = PDF.evaluate(x)?;
    Ok(if value.is_negative() {
        0
    } else {
        clamp_unit(value.magnitude())
    })
}

/// Error function, `erf(x) = 2Φ(x√2) - 1`.
///
/// Odd in `x`, bounded by one in magnitude.
pub fn erf(x: SignedFixed) -> Result<SignedFixed> {
    let scaled = mul_fixed(x.magnitude(), SQRT_2)?;
    let upper = cdf(SignedFixed::positive(scaled))?;
    let magnitude = (2 * upper).saturating_sub(SCALE);
    Ok(SignedFixed::new(magnitude, x.is_negative()))
}

/// Complementary error function, `erfc(x) = 1 - erf(x)`, in `[0, 2]`.
pub fn erfc(x: SignedFixed) -> Result<u128> {
    let e = erf(x)?;
    Ok(if e.is_negative() {
        SCALE + e.magnitude()
    } else {
        SCALE - e.magnitude()
    })
}
