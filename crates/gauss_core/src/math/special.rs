//! Natural logarithm and square root in fixed point.

use crate::constants::LN_2;
use crate::types::{GaussError, Result, Rounding, SignedFixed, SCALE};

use super::arithmetic::{div_fixed, mul_fixed, signed_add};

/// Terms of the `atanh` series used for the reduced logarithm.
const LOG_SERIES_TERMS: u32 = 24;

/// Natural logarithm of a positive scaled value.
///
/// The argument is first reduced to a mantissa `m` in `[1, 2)` with
/// `x = m * 2^k`; then `ln m = 2 * atanh(s)` with `s = (m - 1) / (m + 1)`,
/// summed as an odd power series, and `ln x = ln m + k * ln 2`.
///
/// # Errors
///
/// Returns [`GaussError::NonPositiveLogarithm`] for zero.
///
/// # Example
///
/// ```
/// use gauss_core::math::special::ln_fixed;
/// use gauss_core::types::SCALE;
///
/// let half = ln_fixed(SCALE / 2).unwrap();
/// assert!(half.is_negative());
/// assert_eq!(half.magnitude(), 693_147_180_559_945_309);
/// ```
pub fn ln_fixed(x: u128) -> Result<SignedFixed> {
    if x == 0 {
        return Err(GaussError::NonPositiveLogarithm);
    }

    let mut mantissa = x;
    let mut exponent: i32 = 0;
    while mantissa >= 2 * SCALE {
        mantissa >>= 1;
        exponent += 1;
    }
    while mantissa < SCALE {
        mantissa <<= 1;
        exponent -= 1;
    }

    let s = div_fixed(mantissa - SCALE, mantissa + SCALE, Rounding::Down)?;
    let s_squared = mul_fixed(s, s)?;
    let mut term = s;
    let mut series: u128 = 0;
    for i in 0..LOG_SERIES_TERMS {
        series += term / u128::from(2 * i + 1);
        term = mul_fixed(term, s_squared)?;
    }

    let ln_mantissa = SignedFixed::positive(2 * series);
    let ln_power = SignedFixed::new(
        LN_2 * u128::from(exponent.unsigned_abs()),
        exponent < 0,
    );
    signed_add(ln_mantissa, ln_power)
}

/// Integer square root, `floor(sqrt(n))`.
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let bits = 128 - n.leading_zeros();
    let mut guess = 1u128 << bits.div_ceil(2);
    loop {
        let next = (guess + n / guess) / 2;
        if next >= guess {
            return guess;
        }
        guess = next;
    }
}

/// Fixed-point square root, `floor(sqrt(x * SCALE))`.
///
/// # Errors
///
/// Returns [`GaussError::ArithmeticOverflow`] when `x * SCALE` exceeds `u128`.
pub fn sqrt_fixed(x: u128) -> Result<u128> {
    let scaled = x
        .checked_mul(SCALE)
        .ok_or(GaussError::ArithmeticOverflow("sqrt_fixed"))?;
    Ok(isqrt(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ln_f64(x: u128) -> f64 {
        ln_fixed(x).unwrap().to_f64()
    }

    #[test]
    fn test_ln_of_one_is_zero() {
        assert_eq!(ln_fixed(SCALE).unwrap(), SignedFixed::ZERO);
    }

    #[test]
    fn test_ln_powers_of_two() {
        assert_eq!(ln_fixed(2 * SCALE).unwrap(), SignedFixed::positive(LN_2));
        assert_eq!(ln_fixed(SCALE / 2).unwrap(), SignedFixed::negative(LN_2));
    }

    #[test]
    fn test_ln_known_values() {
        assert_abs_diff_eq!(ln_f64(2_718_281_828_459_045_235), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(ln_f64(100_000_000), -23.025850929940457, epsilon = 1e-13);
        assert_abs_diff_eq!(ln_f64(20_000_000_000_000_000), -3.912023005428146, epsilon = 1e-14);
        assert_abs_diff_eq!(ln_f64(10 * SCALE), std::f64::consts::LN_10, epsilon = 1e-14);
    }

    #[test]
    fn test_ln_smallest_positive() {
        // ln(1e-18)
        assert_abs_diff_eq!(ln_f64(1), -41.44653167389282, epsilon = 1e-12);
    }

    #[test]
    fn test_ln_zero_rejected() {
        assert_eq!(ln_fixed(0), Err(GaussError::NonPositiveLogarithm));
    }

    #[test]
    fn test_isqrt_exact_squares() {
        for n in [0u128, 1, 4, 9, 144, 1 << 64, 10u128.pow(36)] {
            let r = isqrt(n);
            assert_eq!(r * r, n, "isqrt({}) = {}", n, r);
        }
    }

    #[test]
    fn test_isqrt_floor() {
        for n in [2u128, 3, 8, 15, 99, 10u128.pow(37) + 12345, u128::MAX] {
            let r = isqrt(n);
            assert!(r.checked_mul(r).map_or(false, |sq| sq <= n));
            assert!((r + 1).checked_mul(r + 1).map_or(true, |sq| sq > n));
        }
    }

    #[test]
    fn test_sqrt_fixed() {
        assert_eq!(sqrt_fixed(2 * SCALE).unwrap(), 1_414_213_562_373_095_048);
        assert_eq!(sqrt_fixed(4 * SCALE).unwrap(), 2 * SCALE);
        assert_eq!(sqrt_fixed(SCALE / 4).unwrap(), SCALE / 2);
        assert!(sqrt_fixed(u128::MAX).is_err());
    }
}
