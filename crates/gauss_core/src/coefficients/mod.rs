//! Read-only coefficient tables for the four rational approximations.
//!
//! | Set           | Input            | Degrees (P/Q) | Domain           |
//! |---------------|------------------|---------------|------------------|
//! | `Cdf`         | `\|z\|`          | 12 / 12       | `[0, 6]`         |
//! | `Pdf`         | `\|z\|`          | 10 / 10       | `[0, 6]`         |
//! | `PpfCentral`  | `p`              | 8 / 8         | `[0.02, 0.98]`   |
//! | `PpfTail`     | `sqrt(-2 ln p)`  | 5 / 5         | `p < 0.02`       |
//!
//! Each set carries a fingerprint so that a replica of the tables elsewhere
//! can be checked for drift (see [`CoefficientSet::checksum`]).

mod tables;

pub use tables::{CDF, PDF, PPF_CENTRAL, PPF_TAIL};

use crate::checksum::Fnv128;
use crate::math::horner::RationalFunction;

/// Identifies one of the shipped coefficient tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoefficientSet {
    /// Cumulative distribution.
    Cdf,
    /// Density.
    Pdf,
    /// Central quantile region.
    PpfCentral,
    /// Quantile tails.
    PpfTail,
}

impl CoefficientSet {
    /// Every set, in table order.
    pub const ALL: [CoefficientSet; 4] = [
        CoefficientSet::Cdf,
        CoefficientSet::Pdf,
        CoefficientSet::PpfCentral,
        CoefficientSet::PpfTail,
    ];

    /// The rational function backed by this set.
    pub fn rational(self) -> &'static RationalFunction {
        match self {
            CoefficientSet::Cdf => &CDF,
            CoefficientSet::Pdf => &PDF,
            CoefficientSet::PpfCentral => &PPF_CENTRAL,
            CoefficientSet::PpfTail => &PPF_TAIL,
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            CoefficientSet::Cdf => "cdf",
            CoefficientSet::Pdf => "pdf",
            CoefficientSet::PpfCentral => "ppf_central",
            CoefficientSet::PpfTail => "ppf_tail",
        }
    }

    /// Polynomial degrees `(numerator, denominator)`.
    pub fn degrees(self) -> (usize, usize) {
        self.rational().degrees()
    }

    /// Fingerprint of the table.
    ///
    /// Folds every numerator coefficient then every denominator coefficient
    /// (magnitude, then sign flag), followed by the numerator and
    /// denominator lengths.
    pub fn checksum(self) -> u128 {
        let rational = self.rational();
        let mut fnv = Fnv128::new();
        for coefficient in rational
            .numerator()
            .iter()
            .chain(rational.denominator().iter())
        {
            fnv.update_signed(coefficient.magnitude(), coefficient.is_negative());
        }
        fnv.update_len(rational.numerator().len());
        fnv.update_len(rational.denominator().len());
        fnv.finish()
    }
}

/// Largest coefficient magnitude across all tables.
///
/// Bounds the size of Horner intermediates.
pub fn max_coefficient_magnitude() -> u128 {
    CoefficientSet::ALL
        .iter()
        .flat_map(|set| {
            let rational = set.rational();
            rational
                .numerator()
                .iter()
                .chain(rational.denominator().iter())
        })
        .map(|c| c.magnitude())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::horner::horner;
    use crate::types::SCALE;
    use num_bigint::BigUint;

    // Evaluation range of each table's input.
    fn input_range(set: CoefficientSet) -> (u128, u128) {
        match set {
            CoefficientSet::Cdf | CoefficientSet::Pdf => (0, 6 * SCALE),
            CoefficientSet::PpfCentral => (2 * SCALE / 100, 98 * SCALE / 100),
            CoefficientSet::PpfTail => (0, 7 * SCALE),
        }
    }

    #[test]
    fn test_degrees() {
        assert_eq!(CoefficientSet::Cdf.degrees(), (12, 12));
        assert_eq!(CoefficientSet::Pdf.degrees(), (10, 10));
        assert_eq!(CoefficientSet::PpfCentral.degrees(), (8, 8));
        assert_eq!(CoefficientSet::PpfTail.degrees(), (5, 5));
    }

    #[test]
    fn test_denominators_normalised() {
        for set in CoefficientSet::ALL {
            let q0 = set.rational().denominator()[0];
            assert_eq!(q0.magnitude(), SCALE, "{} constant term", set.name());
            assert!(!q0.is_negative());
        }
    }

    #[test]
    fn test_checksums_pinned() {
        assert_eq!(
            CoefficientSet::Cdf.checksum(),
            0xe0849fa8e8b7578526ad4aab3d735480
        );
        assert_eq!(
            CoefficientSet::Pdf.checksum(),
            0xd9f0e7025c9d0cbc13d98e12c06b679f
        );
        assert_eq!(
            CoefficientSet::PpfCentral.checksum(),
            0xebc5ccb8f6f565f17e75570800ca477c
        );
        assert_eq!(
            CoefficientSet::PpfTail.checksum(),
            0x92bdfc36b44d81f25f58d368bf0042b5
        );
    }

    #[test]
    fn test_checksums_distinct() {
        let sums: Vec<u128> = CoefficientSet::ALL.iter().map(|s| s.checksum()).collect();
        for i in 0..sums.len() {
            for j in (i + 1)..sums.len() {
                assert_ne!(sums[i], sums[j]);
            }
        }
    }

    #[test]
    fn test_max_coefficient_magnitude() {
        let max = max_coefficient_magnitude();
        assert_eq!(max, 96_541_336_846_298_615_802_873);
        assert!(max < 10u128.pow(23));
    }

    #[test]
    fn test_denominators_positive_across_range() {
        const STEPS: u128 = 20_000;
        for set in CoefficientSet::ALL {
            let (lo, hi) = input_range(set);
            for k in 0..=STEPS {
                let x = lo + (hi - lo) * k / STEPS;
                let q = horner(x, set.rational().denominator()).unwrap();
                assert!(
                    !q.is_negative() && !q.is_zero(),
                    "{} denominator is {} at {}",
                    set.name(),
                    q,
                    x
                );
                assert!(set.rational().evaluate(x).is_ok());
            }
        }
    }

    #[test]
    fn test_horner_headroom_at_range_end() {
        // sum |c_i| * X^i bounds every Horner accumulator on [0, X].
        for set in CoefficientSet::ALL {
            let (_, hi) = input_range(set);
            let rational = set.rational();
            for poly in [rational.numerator(), rational.denominator()] {
                let x = BigUint::from(hi);
                let scale = BigUint::from(SCALE);
                let mut power = scale.clone();
                let mut bound = BigUint::from(0u8);
                for c in poly {
                    bound += BigUint::from(c.magnitude()) * &power / &scale;
                    power = power * &x / &scale + 1u8;
                }
                assert!(bound.bits() < 100, "{} bound {} bits", set.name(), bound.bits());
                assert!(horner(hi, poly).is_ok());
            }
        }
    }
}
