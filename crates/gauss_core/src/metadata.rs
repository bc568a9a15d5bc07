//! Library metadata for consumers that replicate or audit the kernel.

use crate::checksum::to_hex;
use crate::coefficients::CoefficientSet;
use crate::constants::{EPS, MAX_Z, MIN_DENSITY, NEWTON_STEPS, PRECISION_CLASS, P_HIGH, P_LOW};
use crate::types::SCALE;

/// Degrees and fingerprint of one coefficient table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableInfo {
    /// Which table.
    pub set: CoefficientSet,
    /// Numerator degree.
    pub numerator_degree: usize,
    /// Denominator degree.
    pub denominator_degree: usize,
    /// Fingerprint, hex encoded.
    pub checksum: String,
}

/// Static description of the library build.
///
/// # Example
///
/// ```
/// use gauss_core::metadata::metadata;
///
/// let meta = metadata();
/// assert_eq!(meta.scale, 1_000_000_000_000_000_000);
/// assert_eq!(meta.tables.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metadata {
    /// Crate name.
    pub name: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Fixed-point precision class.
    pub precision_class: &'static str,
    /// Fixed-point scale.
    pub scale: u128,
    /// Forward-function clamp, scaled.
    pub max_z: u128,
    /// Sampling-interval margin, scaled.
    pub eps: u128,
    /// Lower central-region boundary, scaled.
    pub p_low: u128,
    /// Upper central-region boundary, scaled.
    pub p_high: u128,
    /// Default Newton steps.
    pub newton_steps: usize,
    /// Default density guard, scaled.
    pub min_density: u128,
    /// Coefficient tables.
    pub tables: Vec<TableInfo>,
}

/// Describe this build.
pub fn metadata() -> Metadata {
    let tables = CoefficientSet::ALL
        .iter()
        .map(|&set| {
            let (numerator_degree, denominator_degree) = set.degrees();
            TableInfo {
                set,
                numerator_degree,
                denominator_degree,
                checksum: to_hex(set.checksum()),
            }
        })
        .collect();

    Metadata {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        precision_class: PRECISION_CLASS,
        scale: SCALE,
        max_z: MAX_Z,
        eps: EPS,
        p_low: P_LOW,
        p_high: P_HIGH,
        newton_steps: NEWTON_STEPS,
        min_density: MIN_DENSITY,
        tables,
    }
}
