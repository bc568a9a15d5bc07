//! Polynomial and rational-function evaluation on fixed-point coefficients.
//!
//! Coefficients are signed and listed lowest degree first. Evaluation points
//! are always non-negative: the distribution functions evaluate at `|z|`,
//! `p`, or the tail transform `t`, and fold signs in afterwards.
//!
//! [`horner`] truncates after every multiply. [`RationalFunction::evaluate`]
//! instead runs Horner's scheme on exact integers and truncates once, in the
//! final division, so the result is `floor(SCALE * P(x) / Q(x))` and inherits
//! the monotonicity of the fitted function.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::types::{GaussError, Result, SignedFixed, SCALE};

use super::arithmetic::{mul_fixed, signed_add};

/// A signed polynomial coefficient scaled by [`SCALE`](crate::types::SCALE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coefficient {
    magnitude: u128,
    negative: bool,
}

impl Coefficient {
    /// Non-negative coefficient.
    pub const fn pos(magnitude: u128) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }

    /// Negative coefficient.
    pub const fn neg(magnitude: u128) -> Self {
        Self {
            magnitude,
            negative: magnitude != 0,
        }
    }

    /// Scaled magnitude.
    pub const fn magnitude(&self) -> u128 {
        self.magnitude
    }

    /// Sign flag.
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The coefficient as a signed value.
    #[inline]
    pub const fn value(&self) -> SignedFixed {
        SignedFixed::new(self.magnitude, self.negative)
    }
}

/// Evaluate `sum c_i * x^i` by Horner's scheme.
///
/// Starting from the highest-degree coefficient, each step multiplies the
/// accumulator magnitude by `x` (truncating) and adds the next coefficient
/// with [`signed_add`]. An empty slice evaluates to zero.
///
/// # Example
///
/// ```
/// use gauss_core::math::horner::{horner, Coefficient};
/// use gauss_core::types::{SignedFixed, SCALE};
///
/// // 1 - 3x + x^2 at x = 2
/// let poly = [Coefficient::pos(SCALE), Coefficient::neg(3 * SCALE), Coefficient::pos(SCALE)];
/// assert_eq!(horner(2 * SCALE, &poly).unwrap(), SignedFixed::from_integer(-1));
/// ```
pub fn horner(x: u128, coefficients: &[Coefficient]) -> Result<SignedFixed> {
    let Some((highest, rest)) = coefficients.split_last() else {
        return Ok(SignedFixed::ZERO);
    };
    let mut acc = highest.value();
    for coefficient in rest.iter().rev() {
        acc = SignedFixed::new(mul_fixed(acc.magnitude(), x)?, acc.is_negative());
        acc = signed_add(acc, coefficient.value())?;
    }
    Ok(acc)
}

/// Horner's scheme without truncation.
///
/// Returns `sum c_i * x^i * SCALE^(d - i)` for degree `d`, which is the
/// real polynomial value at `x / SCALE` multiplied by `SCALE^(d + 1)`.
fn exact_horner(x: u128, coefficients: &[Coefficient]) -> BigInt {
    let Some((highest, rest)) = coefficients.split_last() else {
        return BigInt::zero();
    };
    let x = BigInt::from(x);
    let scale = BigInt::from(SCALE);
    let mut power = scale.clone();
    let mut acc = exact_value(highest);
    for coefficient in rest.iter().rev() {
        acc = acc * &x + exact_value(coefficient) * &power;
        power *= &scale;
    }
    acc
}

fn exact_value(coefficient: &Coefficient) -> BigInt {
    let magnitude = BigInt::from(coefficient.magnitude);
    if coefficient.negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Ratio of two fixed-point polynomials, `P(x) / Q(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalFunction {
    numerator: &'static [Coefficient],
    denominator: &'static [Coefficient],
}

impl RationalFunction {
    /// Pair a numerator with a denominator.
    pub const fn new(
        numerator: &'static [Coefficient],
        denominator: &'static [Coefficient],
    ) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Numerator coefficients, lowest degree first.
    pub fn numerator(&self) -> &'static [Coefficient] {
        self.numerator
    }

    /// Denominator coefficients, lowest degree first.
    pub fn denominator(&self) -> &'static [Coefficient] {
        self.denominator
    }

    /// Polynomial degrees `(numerator, denominator)`.
    pub fn degrees(&self) -> (usize, usize) {
        (
            self.numerator.len().saturating_sub(1),
            self.denominator.len().saturating_sub(1),
        )
    }

    /// Evaluate at a non-negative point.
    ///
    /// Both polynomials are evaluated exactly; the magnitude is
    /// `|P| * SCALE / |Q|` truncated once, and the sign is the exclusive-or
    /// of the two signs.
    ///
    /// # Errors
    ///
    /// - [`GaussError::DenominatorZero`] if `Q(x)` is exactly zero
    /// - [`GaussError::ArithmeticOverflow`] if the quotient exceeds `u128`
    pub fn evaluate(&self, x: u128) -> Result<SignedFixed> {
        let p = exact_horner(x, self.numerator);
        let q = exact_horner(x, self.denominator);
        if q.is_zero() {
            return Err(GaussError::DenominatorZero { x });
        }
        let (numerator_degree, denominator_degree) = self.degrees();
        let scale = BigUint::from(SCALE);
        let top = p.magnitude() * scale.pow(denominator_degree as u32 + 1);
        let bottom = q.magnitude() * scale.pow(numerator_degree as u32);
        let magnitude = (top / bottom)
            .to_u128()
            .ok_or(GaussError::ArithmeticOverflow("rational evaluate"))?;
        let negative = (p.sign() == Sign::Minus) != (q.sign() == Sign::Minus);
        Ok(SignedFixed::new(magnitude, negative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SCALE;

    static LINEAR: [Coefficient; 2] = [Coefficient::pos(SCALE), Coefficient::neg(SCALE)];
    static CONSTANT_TWO: [Coefficient; 1] = [Coefficient::pos(2 * SCALE)];
    static EMPTY: [Coefficient; 0] = [];

    #[test]
    fn test_horner_empty_is_zero() {
        assert_eq!(horner(SCALE, &[]).unwrap(), SignedFixed::ZERO);
    }

    #[test]
    fn test_horner_constant() {
        assert_eq!(
            horner(123 * SCALE, &[Coefficient::neg(5 * SCALE)]).unwrap(),
            SignedFixed::from_integer(-5)
        );
    }

    #[test]
    fn test_horner_cubic() {
        // 2 + 0x - x^2 + 0.5x^3 at x = 2: 2 - 4 + 4 = 2
        let poly = [
            Coefficient::pos(2 * SCALE),
            Coefficient::pos(0),
            Coefficient::neg(SCALE),
            Coefficient::pos(SCALE / 2),
        ];
        assert_eq!(horner(2 * SCALE, &poly).unwrap(), SignedFixed::from_integer(2));
    }

    #[test]
    fn test_neg_zero_coefficient_is_canonical() {
        assert_eq!(Coefficient::neg(0), Coefficient::pos(0));
    }

    #[test]
    fn test_rational_sign_is_xor() {
        let f = RationalFunction::new(&LINEAR, &CONSTANT_TWO);
        // (1 - 3) / 2 = -1
        assert_eq!(f.evaluate(3 * SCALE).unwrap(), SignedFixed::from_integer(-1));
        // (1 - 0.5) / 2 = 0.25
        assert_eq!(f.evaluate(SCALE / 2).unwrap(), SignedFixed::positive(SCALE / 4));
    }

    #[test]
    fn test_rational_denominator_zero() {
        let f = RationalFunction::new(&CONSTANT_TWO, &LINEAR);
        assert_eq!(
            f.evaluate(SCALE),
            Err(GaussError::DenominatorZero { x: SCALE })
        );
        let g = RationalFunction::new(&CONSTANT_TWO, &EMPTY);
        assert!(g.evaluate(0).is_err());
    }

    #[test]
    fn test_rational_truncates_once() {
        // 1e-18 * x^2 at x = 1.5: the truncating scheme floors each
        // intermediate to one unit, exact evaluation keeps 2.25 units.
        static TINY_SQUARE: [Coefficient; 3] = [
            Coefficient::pos(0),
            Coefficient::pos(0),
            Coefficient::pos(1),
        ];
        static ONE: [Coefficient; 1] = [Coefficient::pos(SCALE)];
        let f = RationalFunction::new(&TINY_SQUARE, &ONE);
        assert_eq!(horner(3 * SCALE / 2, &TINY_SQUARE).unwrap(), SignedFixed::positive(1));
        assert_eq!(f.evaluate(3 * SCALE / 2).unwrap(), SignedFixed::positive(2));
    }

    #[test]
    fn test_rational_mixed_degrees() {
        // 2 / (x / 2) at x = 4
        static HALF_X: [Coefficient; 2] = [Coefficient::pos(0), Coefficient::pos(SCALE / 2)];
        let f = RationalFunction::new(&CONSTANT_TWO, &HALF_X);
        assert_eq!(f.evaluate(4 * SCALE).unwrap(), SignedFixed::ONE);
    }

    #[test]
    fn test_degrees() {
        let f = RationalFunction::new(&LINEAR, &CONSTANT_TWO);
        assert_eq!(f.degrees(), (1, 0));
    }
}
