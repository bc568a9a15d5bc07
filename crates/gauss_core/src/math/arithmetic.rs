//! Fixed-point arithmetic on scaled integers.
//!
//! Products and quotients are formed in an arbitrary-width intermediate
//! ([`BigUint`]) and narrowed back to `u128` with an explicit check, so no
//! operation silently wraps. All results are deterministic integers: the same
//! inputs give the same bits on every platform.
//!
//! # Example
//!
//! ```
//! use gauss_core::math::arithmetic::{div_fixed, mul_fixed, signed_add};
//! use gauss_core::types::{Rounding, SignedFixed, SCALE};
//!
//! assert_eq!(mul_fixed(3 * SCALE, SCALE / 2).unwrap(), 3 * SCALE / 2);
//! assert_eq!(div_fixed(SCALE, 3 * SCALE, Rounding::Down).unwrap(), 333_333_333_333_333_333);
//!
//! let sum = signed_add(SignedFixed::from_integer(2), SignedFixed::from_integer(-5)).unwrap();
//! assert_eq!(sum, SignedFixed::from_integer(-3));
//! ```

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::types::{GaussError, Result, Rounding, SignedFixed, SCALE};

#[inline]
fn widen(value: u128) -> BigUint {
    BigUint::from(value)
}

fn narrow(value: BigUint, context: &'static str) -> Result<u128> {
    value.to_u128().ok_or(GaussError::ArithmeticOverflow(context))
}

/// Sign-aware addition.
///
/// Equal signs add magnitudes; opposite signs subtract the smaller magnitude
/// from the larger and keep the sign of the larger. Zero results are
/// canonical.
pub fn signed_add(a: SignedFixed, b: SignedFixed) -> Result<SignedFixed> {
    if a.is_negative() == b.is_negative() {
        let magnitude = a
            .magnitude()
            .checked_add(b.magnitude())
            .ok_or(GaussError::ArithmeticOverflow("signed_add"))?;
        return Ok(SignedFixed::new(magnitude, a.is_negative()));
    }
    if a.magnitude() >= b.magnitude() {
        Ok(SignedFixed::new(a.magnitude() - b.magnitude(), a.is_negative()))
    } else {
        Ok(SignedFixed::new(b.magnitude() - a.magnitude(), b.is_negative()))
    }
}

/// Sign-aware subtraction, `a - b`.
#[inline]
pub fn signed_sub(a: SignedFixed, b: SignedFixed) -> Result<SignedFixed> {
    signed_add(a, -b)
}

/// Fixed-point product `floor(a * b / SCALE)`.
pub fn mul_fixed(a: u128, b: u128) -> Result<u128> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    narrow(widen(a) * widen(b) / widen(SCALE), "mul_fixed")
}

/// Signed fixed-point product; the magnitude is truncated toward zero.
pub fn mul_signed(a: SignedFixed, b: SignedFixed) -> Result<SignedFixed> {
    let magnitude = mul_fixed(a.magnitude(), b.magnitude())?;
    Ok(SignedFixed::new(
        magnitude,
        a.is_negative() != b.is_negative(),
    ))
}

/// Fixed-point quotient `a * SCALE / b` with the requested rounding.
///
/// # Errors
///
/// Returns [`GaussError::DivisionByZero`] when `b == 0` and
/// [`GaussError::ArithmeticOverflow`] when the quotient exceeds `u128`.
pub fn div_fixed(a: u128, b: u128, rounding: Rounding) -> Result<u128> {
    if b == 0 {
        return Err(GaussError::DivisionByZero);
    }
    let numerator = widen(a) * widen(SCALE);
    let divisor = widen(b);
    let quotient = &numerator / &divisor;
    let remainder = numerator % &divisor;

    let round_up = match rounding {
        Rounding::Down => false,
        Rounding::Up => !remainder.is_zero(),
        Rounding::Nearest => remainder * 2u32 >= divisor,
    };
    let quotient = if round_up { quotient + 1u32 } else { quotient };
    narrow(quotient, "div_fixed")
}

/// Signed fixed-point quotient; rounding applies to the magnitude.
pub fn div_signed(a: SignedFixed, b: SignedFixed, rounding: Rounding) -> Result<SignedFixed> {
    let magnitude = div_fixed(a.magnitude(), b.magnitude(), rounding)?;
    Ok(SignedFixed::new(
        magnitude,
        a.is_negative() != b.is_negative(),
    ))
}

/// Clamp an unsigned value to `[0, SCALE]`.
#[inline]
pub fn clamp_unit(value: u128) -> u128 {
    value.min(SCALE)
}

/// Clamp the magnitude of `value` to `ceiling`, preserving its sign.
#[inline]
pub fn clamp_magnitude(value: SignedFixed, ceiling: u128) -> SignedFixed {
    SignedFixed::new(value.magnitude().min(ceiling), value.is_negative())
}
