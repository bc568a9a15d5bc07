//! Conformance vectors.
//!
//! A deterministic grid of inputs with the kernel's exact outputs, plus a
//! fingerprint of each list. Another implementation of the same tables can
//! regenerate the grid and compare bit for bit; [`verify`] re-evaluates a
//! stored set against this build.

use tracing::{debug, warn};

use crate::checksum::{to_hex, Fnv128};
use crate::constants::{EPS, MAX_Z, P_HIGH, P_LOW};
use crate::distribution::{cdf, pdf, ppf, Region};
use crate::math::arithmetic::signed_sub;
use crate::types::{GaussError, Result, SignedFixed, SCALE};

/// Grid sizes for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorConfig {
    /// Evenly spaced `z` points on `[-6, 6]`.
    pub z_points: usize,
    /// Evenly spaced probabilities on `[0.02, 0.98]`.
    pub central_points: usize,
    /// Decades of tail probabilities below `0.01`, mirrored into the upper tail.
    pub tail_decades: u32,
}

impl Default for VectorConfig {
    /// 49 `z` points (step 0.25), 49 central probabilities (step 0.02) and
    /// eight tail decades down to `1e-10`.
    fn default() -> Self {
        Self {
            z_points: 49,
            central_points: 49,
            tail_decades: 8,
        }
    }
}

impl VectorConfig {
    /// Check that the grids are well formed.
    pub fn validate(&self) -> Result<()> {
        if self.z_points < 2 || self.central_points < 2 {
            return Err(GaussError::InvalidConfig(
                "grids need at least two points".to_string(),
            ));
        }
        if self.tail_decades > 8 {
            return Err(GaussError::InvalidConfig(format!(
                "tail_decades must be at most 8, got {}",
                self.tail_decades
            )));
        }
        Ok(())
    }
}

/// Forward-function sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardVector {
    /// Argument.
    pub z: SignedFixed,
    /// `Φ(z)`, scaled.
    pub cdf: u128,
    /// `φ(z)`, scaled.
    pub pdf: u128,
}

/// Quantile sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantileVector {
    /// Probability, scaled.
    pub p: u128,
    /// Region used for the initial estimate.
    pub region: Region,
    /// `Φ⁻¹(p)`.
    pub z: SignedFixed,
}

/// A complete set of conformance vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConformanceVectors {
    /// Forward-function points.
    pub forward: Vec<ForwardVector>,
    /// Quantile points, ascending in `p`.
    pub quantiles: Vec<QuantileVector>,
    /// Fingerprint of `forward`.
    pub forward_checksum: String,
    /// Fingerprint of `quantiles`.
    pub quantile_checksum: String,
}

/// A stored value that this build no longer reproduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Which list and field.
    pub field: &'static str,
    /// Index within the list.
    pub index: usize,
    /// Stored value.
    pub expected: String,
    /// Recomputed value.
    pub actual: String,
}

fn z_grid(points: usize) -> Result<Vec<SignedFixed>> {
    let span = 2 * MAX_Z;
    let steps = (points - 1) as u128;
    (0..points)
        .map(|i| {
            let offset = span * i as u128 / steps;
            signed_sub(SignedFixed::positive(offset), SignedFixed::positive(MAX_Z))
        })
        .collect()
}

fn probability_grid(config: &VectorConfig) -> Vec<u128> {
    let mut lower_tail = Vec::new();
    for decade in 0..config.tail_decades {
        let unit = SCALE / 10u128.pow(decade + 3);
        for mantissa in [5u128, 2, 1] {
            lower_tail.push(mantissa * unit);
        }
    }
    lower_tail.push(SCALE / 100);
    lower_tail.retain(|&p| p >= EPS);
    lower_tail.sort_unstable();

    let steps = (config.central_points - 1) as u128;
    let central = (0..config.central_points)
        .map(|i| P_LOW + (P_HIGH - P_LOW) * i as u128 / steps);

    let upper_tail: Vec<u128> = lower_tail.iter().rev().map(|&p| SCALE - p).collect();

    lower_tail
        .iter()
        .copied()
        .chain(central)
        .chain(upper_tail)
        .collect()
}

/// Fingerprint of a forward list.
pub fn forward_checksum(forward: &[ForwardVector]) -> u128 {
    let mut fnv = Fnv128::new();
    for v in forward {
        fnv.update_signed(v.z.magnitude(), v.z.is_negative());
        fnv.update(v.cdf);
        fnv.update(v.pdf);
    }
    fnv.update_len(forward.len());
    fnv.finish()
}

/// Fingerprint of a quantile list.
pub fn quantile_checksum(quantiles: &[QuantileVector]) -> u128 {
    let mut fnv = Fnv128::new();
    for v in quantiles {
        fnv.update(v.p);
        fnv.update_signed(v.z.magnitude(), v.z.is_negative());
    }
    fnv.update_len(quantiles.len());
    fnv.finish()
}

/// Evaluate the kernel on the configured grids.
///
/// # Example
///
/// ```
/// use gauss_core::vectors::{generate, VectorConfig};
///
/// let vectors = generate(&VectorConfig::default()).unwrap();
/// assert_eq!(vectors.forward.len(), 49);
/// assert_eq!(vectors, generate(&VectorConfig::default()).unwrap());
/// ```
pub fn generate(config: &VectorConfig) -> Result<ConformanceVectors> {
    config.validate()?;

    let forward = z_grid(config.z_points)?
        .into_iter()
        .map(|z| {
            Ok(ForwardVector {
                z,
                cdf: cdf(z)?,
                pdf: pdf(z)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let quantiles = probability_grid(config)
        .into_iter()
        .map(|p| {
            Ok(QuantileVector {
                p,
                region: Region::classify(p),
                z: ppf(p)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        forward = forward.len(),
        quantiles = quantiles.len(),
        "conformance vectors generated"
    );

    Ok(ConformanceVectors {
        forward_checksum: to_hex(forward_checksum(&forward)),
        quantile_checksum: to_hex(quantile_checksum(&quantiles)),
        forward,
        quantiles,
    })
}

/// Re-evaluate stored vectors and list every disagreement.
///
/// Stored fingerprints are checked against the stored values as well, so a
/// hand-edited file is reported even if it happens to match this build.
pub fn verify(vectors: &ConformanceVectors) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();
    let mut report = |field: &'static str, index: usize, expected: String, actual: String| {
        if expected != actual {
            mismatches.push(Mismatch {
                field,
                index,
                expected,
                actual,
            });
        }
    };

    for (index, v) in vectors.forward.iter().enumerate() {
        report("forward.cdf", index, v.cdf.to_string(), cdf(v.z)?.to_string());
        report("forward.pdf", index, v.pdf.to_string(), pdf(v.z)?.to_string());
    }
    for (index, v) in vectors.quantiles.iter().enumerate() {
        report("quantiles.z", index, v.z.to_string(), ppf(v.p)?.to_string());
        report(
            "quantiles.region",
            index,
            v.region.to_string(),
            Region::classify(v.p).to_string(),
        );
    }
    report(
        "forward_checksum",
        0,
        vectors.forward_checksum.clone(),
        to_hex(forward_checksum(&vectors.forward)),
    );
    report(
        "quantile_checksum",
        0,
        vectors.quantile_checksum.clone(),
        to_hex(quantile_checksum(&vectors.quantiles)),
    );

    if !mismatches.is_empty() {
        warn!(count = mismatches.len(), "conformance vectors disagree");
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_shapes() {
        let vectors = generate(&VectorConfig::default()).unwrap();
        assert_eq!(vectors.forward.len(), 49);
        // 8 decades * 3 mantissas + 0.01, on both sides, plus 49 central
        assert_eq!(vectors.quantiles.len(), 2 * 25 + 49);
    }

    #[test]
    fn test_z_grid_endpoints_and_step() {
        let grid = z_grid(49).unwrap();
        assert_eq!(grid[0], SignedFixed::from_integer(-6));
        assert_eq!(grid[24], SignedFixed::ZERO);
        assert_eq!(grid[48], SignedFixed::from_integer(6));
        assert_eq!(grid[1], SignedFixed::negative(23 * SCALE / 4));
    }

    #[test]
    fn test_probability_grid_sorted_and_in_domain() {
        let grid = probability_grid(&VectorConfig::default());
        assert_eq!(grid.first(), Some(&EPS));
        assert_eq!(grid.last(), Some(&(SCALE - EPS)));
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_quantiles_monotone() {
        let vectors = generate(&VectorConfig::default()).unwrap();
        assert!(vectors.quantiles.windows(2).all(|w| w[0].z < w[1].z));
    }

    #[test]
    fn test_verify_clean() {
        let vectors = generate(&VectorConfig {
            z_points: 5,
            central_points: 5,
            tail_decades: 2,
        })
        .unwrap();
        assert!(verify(&vectors).unwrap().is_empty());
    }

    #[test]
    fn test_verify_detects_tampering() {
        let mut vectors = generate(&VectorConfig {
            z_points: 5,
            central_points: 5,
            tail_decades: 1,
        })
        .unwrap();
        vectors.forward[2].cdf += 1;
        let mismatches = verify(&vectors).unwrap();
        let fields: Vec<&str> = mismatches.iter().map(|m| m.field).collect();
        assert_eq!(fields, vec!["forward.cdf", "forward_checksum"]);
        assert_eq!(mismatches[0].index, 2);
    }

    #[test]
    fn test_invalid_config() {
        let config = VectorConfig {
            z_points: 1,
            ..VectorConfig::default()
        };
        assert!(generate(&config).is_err());
        let config = VectorConfig {
            tail_decades: 9,
            ..VectorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
