//! Signed fixed-point values.
//!
//! Every real quantity in the kernel is an integer scaled by [`SCALE`]
//! (`10^18`). Unsigned quantities such as probabilities and densities are
//! plain `u128`; signed ones use [`SignedFixed`], a magnitude paired with a
//! sign flag. Zero is always stored with the sign flag cleared, so two values
//! compare equal exactly when they denote the same number.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use super::error::{GaussError, Result};

/// Fixed-point scale: the real value `v` is stored as `v * 10^18`.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Number of fractional decimal digits carried by [`SCALE`].
pub const DECIMALS: u32 = 18;

/// Rounding applied to the magnitude of a quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Truncate toward zero.
    #[default]
    Down,
    /// Round away from zero whenever a remainder is left.
    Up,
    /// Round half away from zero.
    Nearest,
}

/// Signed fixed-point number scaled by [`SCALE`].
///
/// # Examples
///
/// ```
/// use gauss_core::types::{SignedFixed, SCALE};
///
/// let z: SignedFixed = "-1.5".parse().unwrap();
/// assert_eq!(z.magnitude(), 3 * SCALE / 2);
/// assert!(z.is_negative());
/// assert_eq!(z.to_string(), "-1.500000000000000000");
///
/// // Zero never carries a sign.
/// assert_eq!(SignedFixed::negative(0), SignedFixed::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedFixed {
    magnitude: u128,
    negative: bool,
}

impl SignedFixed {
    /// Zero.
    pub const ZERO: Self = Self {
        magnitude: 0,
        negative: false,
    };

    /// One.
    pub const ONE: Self = Self {
        magnitude: SCALE,
        negative: false,
    };

    /// Build from a scaled magnitude and sign, canonicalising zero.
    #[inline]
    pub const fn new(magnitude: u128, negative: bool) -> Self {
        Self {
            magnitude,
            negative: negative && magnitude != 0,
        }
    }

    /// Non-negative value with the given scaled magnitude.
    #[inline]
    pub const fn positive(magnitude: u128) -> Self {
        Self::new(magnitude, false)
    }

    /// Non-positive value with the given scaled magnitude.
    #[inline]
    pub const fn negative(magnitude: u128) -> Self {
        Self::new(magnitude, true)
    }

    /// Exact value of a whole number.
    pub fn from_integer(value: i64) -> Self {
        Self::new(u128::from(value.unsigned_abs()) * SCALE, value < 0)
    }

    /// Value from a raw scaled two's-complement integer.
    pub fn from_raw(raw: i128) -> Self {
        Self::new(raw.unsigned_abs(), raw < 0)
    }

    /// Raw scaled integer, or `None` when the magnitude exceeds `i128::MAX`.
    pub fn to_raw(self) -> Option<i128> {
        let magnitude = i128::try_from(self.magnitude).ok()?;
        Some(if self.negative { -magnitude } else { magnitude })
    }

    /// Scaled magnitude.
    #[inline]
    pub const fn magnitude(self) -> u128 {
        self.magnitude
    }

    /// True for strictly negative values.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    /// True for zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.magnitude == 0
    }

    /// Absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self::positive(self.magnitude)
    }

    /// Lossy conversion for diagnostics and reporting.
    ///
    /// Never feed the result back into the kernel.
    pub fn to_f64(self) -> f64 {
        let value = self.magnitude as f64 / SCALE as f64;
        if self.negative {
            -value
        } else {
            value
        }
    }
}

impl Neg for SignedFixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.magnitude, !self.negative)
    }
}

impl Ord for SignedFixed {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for SignedFixed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SignedFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{}{}.{:018}",
            sign,
            self.magnitude / SCALE,
            self.magnitude % SCALE
        )
    }
}

impl FromStr for SignedFixed {
    type Err = GaussError;

    /// Parse a plain decimal literal such as `-1.96` or `+0.5`.
    ///
    /// At most 18 fractional digits are accepted; exponents are not.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GaussError::InvalidLiteral(s.to_string());
        let trimmed = s.trim();
        let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
            || frac_part.len() > DECIMALS as usize
        {
            return Err(invalid());
        }

        let integer: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        let fraction: u128 = if frac_part.is_empty() {
            0
        } else {
            let digits: u128 = frac_part.parse().map_err(|_| invalid())?;
            digits * 10u128.pow(DECIMALS - frac_part.len() as u32)
        };

        let magnitude = integer
            .checked_mul(SCALE)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self::new(magnitude, negative))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SignedFixed {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SignedFixed {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(SignedFixed::new(0, true), SignedFixed::ZERO);
        assert!(!SignedFixed::negative(0).is_negative());
        assert_eq!(-SignedFixed::ZERO, SignedFixed::ZERO);
    }

    #[test]
    fn test_from_integer() {
        let v = SignedFixed::from_integer(-6);
        assert_eq!(v.magnitude(), 6 * SCALE);
        assert!(v.is_negative());
        assert_eq!(SignedFixed::from_integer(1), SignedFixed::ONE);
    }

    #[test]
    fn test_raw_conversion() {
        let v = SignedFixed::from_raw(-1_500_000_000_000_000_000);
        assert_eq!(v.to_raw(), Some(-1_500_000_000_000_000_000));
        assert_eq!(SignedFixed::positive(u128::MAX).to_raw(), None);
    }

    #[test]
    fn test_ordering() {
        let a = SignedFixed::from_integer(-2);
        let b = SignedFixed::from_integer(-1);
        let c = SignedFixed::ZERO;
        let d = SignedFixed::from_integer(3);
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert!(a < d);
        assert_eq!(a.max(d), d);
    }

    #[test]
    fn test_parse_and_display() {
        let v: SignedFixed = "1.959963984540054".parse().unwrap();
        assert_eq!(v.magnitude(), 1_959_963_984_540_054_000);
        assert_eq!(v.to_string(), "1.959963984540054000");

        let w: SignedFixed = "-.5".parse().unwrap();
        assert_eq!(w, SignedFixed::negative(SCALE / 2));

        let x: SignedFixed = "+7".parse().unwrap();
        assert_eq!(x, SignedFixed::from_integer(7));

        assert_eq!("-0.0".parse::<SignedFixed>().unwrap(), SignedFixed::ZERO);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", ".", "-", "1.2.3", "1e5", "abc", "0.1234567890123456789"] {
            assert!(
                matches!(bad.parse::<SignedFixed>(), Err(GaussError::InvalidLiteral(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "999999999999999999999999999999";
        assert!(huge.parse::<SignedFixed>().is_err());
    }

    #[test]
    fn test_to_f64() {
        let v = SignedFixed::negative(SCALE / 4);
        assert!((v.to_f64() + 0.25).abs() < 1e-15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let v = SignedFixed::from_integer(-3);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"-3.000000000000000000\"");
        let back: SignedFixed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
