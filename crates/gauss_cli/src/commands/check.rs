//! `check` command
//!
//! Verifies conformance vectors (a stored file, or a freshly generated
//! default set), the coefficient table fingerprints and a handful of
//! reference values, then runs a quick quantile round-trip pass.

use std::path::Path;

use gauss_core::coefficients::CoefficientSet;
use gauss_core::distribution::{cdf, pdf, ppf};
use gauss_core::math::arithmetic::signed_sub;
use gauss_core::metadata::metadata;
use gauss_core::types::SignedFixed;
use gauss_core::vectors::{generate, verify, ConformanceVectors, VectorConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::emit;
use crate::{CliError, Result};

/// Largest accepted `|ppf(cdf(z)) - z|` for `|z| <= 3`, scaled (1e-9)
const ROUND_TRIP_TOLERANCE: u128 = 1_000_000_000;

/// Shipped table fingerprints
const EXPECTED_TABLES: [(CoefficientSet, &str); 4] = [
    (CoefficientSet::Cdf, "0xe0849fa8e8b7578526ad4aab3d735480"),
    (CoefficientSet::Pdf, "0xd9f0e7025c9d0cbc13d98e12c06b679f"),
    (CoefficientSet::PpfCentral, "0xebc5ccb8f6f565f17e75570800ca477c"),
    (CoefficientSet::PpfTail, "0x92bdfc36b44d81f25f58d368bf0042b5"),
];

/// Reference values (function, argument, true value to 18 places), checked to 1e-9
const REFERENCE_VALUES: [(&str, &str, &str); 5] = [
    ("cdf", "1", "0.841344746068542948"),
    ("cdf", "-2", "0.022750131948179207"),
    ("pdf", "0", "0.398942280401432677"),
    ("pdf", "1", "0.241970724519143349"),
    ("ppf", "0.975", "1.959963984540053856"),
];

#[derive(Debug, Serialize)]
struct CheckReport {
    source: String,
    forward: usize,
    quantiles: usize,
    mismatches: Vec<String>,
    worst_round_trip: SignedFixed,
}

fn load(path: &Path) -> Result<ConformanceVectors> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Compare each table fingerprint against the shipped value
pub fn table_failures() -> Vec<String> {
    let meta = metadata();
    EXPECTED_TABLES
        .iter()
        .filter_map(|&(set, expected)| {
            let actual = meta.tables.iter().find(|t| t.set == set)?;
            (actual.checksum != expected).then(|| {
                format!(
                    "table {}: expected {}, got {}",
                    set.name(),
                    expected,
                    actual.checksum
                )
            })
        })
        .collect()
}

/// Evaluate the reference points and list those off by more than 1e-9
pub fn reference_failures() -> Result<Vec<String>> {
    let mut failures = Vec::new();
    for (function, arg, truth) in REFERENCE_VALUES {
        let arg: SignedFixed = arg.parse()?;
        let truth: SignedFixed = truth.parse()?;
        let value = match function {
            "cdf" => SignedFixed::positive(cdf(arg)?),
            "pdf" => SignedFixed::positive(pdf(arg)?),
            _ => ppf(arg.magnitude())?,
        };
        if signed_sub(value, truth)?.magnitude() > ROUND_TRIP_TOLERANCE {
            failures.push(format!(
                "{}({}): expected {}, got {}",
                function, arg, truth, value
            ));
        }
    }
    Ok(failures)
}

/// Worst round-trip error over `z` in `[-3, 3]`, step 0.25
pub fn worst_round_trip() -> Result<SignedFixed> {
    let mut worst = SignedFixed::ZERO;
    for quarter in -12i64..=12 {
        let z = SignedFixed::from_raw(i128::from(quarter) * 250_000_000_000_000_000);
        let back = ppf(cdf(z)?)?;
        let err = signed_sub(back, z)?.abs();
        if err > worst {
            worst = err;
        }
    }
    Ok(worst)
}

/// Run the check command
pub fn run(vectors_path: Option<&Path>, config: &CliConfig) -> Result<()> {
    let (source, vectors) = match vectors_path {
        Some(path) => {
            info!("Loading vectors from {}", path.display());
            (path.display().to_string(), load(path)?)
        }
        None => {
            info!("No vector file given, checking a freshly generated default set");
            ("generated".to_string(), generate(&VectorConfig::default())?)
        }
    };

    let mut mismatches: Vec<String> = verify(&vectors)?
        .into_iter()
        .map(|m| {
            warn!(field = m.field, index = m.index, "vector mismatch");
            format!("{}[{}]: expected {}, got {}", m.field, m.index, m.expected, m.actual)
        })
        .collect();
    mismatches.extend(table_failures());
    mismatches.extend(reference_failures()?);

    let worst = worst_round_trip()?;
    let round_trip_ok = worst.magnitude() <= ROUND_TRIP_TOLERANCE;
    if !round_trip_ok {
        warn!("round-trip error {} exceeds tolerance", worst);
    }

    let report = CheckReport {
        source,
        forward: vectors.forward.len(),
        quantiles: vectors.quantiles.len(),
        mismatches,
        worst_round_trip: worst,
    };
    emit(config.format, &report, || {
        let mut lines = vec![
            format!(
                "{}: {} forward, {} quantile vectors",
                report.source, report.forward, report.quantiles
            ),
            format!("worst round trip: {}", report.worst_round_trip),
        ];
        lines.extend(report.mismatches.iter().cloned());
        lines.push(if report.mismatches.is_empty() && round_trip_ok {
            "OK".to_string()
        } else {
            "FAILED".to_string()
        });
        lines.join("\n")
    })?;

    let failures = report.mismatches.len() + usize::from(!round_trip_ok);
    if failures > 0 {
        return Err(CliError::CheckFailed(failures));
    }
    info!("Check passed");
    Ok(())
}
