//! `ppf` command

use gauss_core::distribution::{ppf_with, Region};
use gauss_core::math::solvers::RefinementConfig;
use gauss_core::types::SignedFixed;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::emit;
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct Quantile {
    p: SignedFixed,
    region: Region,
    newton_steps: usize,
    z: SignedFixed,
}

/// Convert a decimal probability argument to its scaled form
pub fn probability_from(p: SignedFixed) -> Result<u128> {
    if p.is_negative() {
        return Err(CliError::InvalidArgument(format!(
            "probability must not be negative, got {}",
            p
        )));
    }
    Ok(p.magnitude())
}

/// Run the quantile command
///
/// `steps` overrides the configured Newton step count.
pub fn run(p: SignedFixed, steps: Option<usize>, config: &CliConfig) -> Result<()> {
    let scaled = probability_from(p)?;
    let newton_steps = steps.unwrap_or(config.newton_steps);
    let refinement = RefinementConfig {
        steps: newton_steps,
        ..RefinementConfig::default()
    };

    info!("Computing ppf({}) with {} Newton step(s)", p, newton_steps);
    let z = ppf_with(scaled, &refinement)?;
    let quantile = Quantile {
        p,
        region: Region::classify(scaled),
        newton_steps,
        z,
    };
    emit(config.format, &quantile, || {
        format!("ppf({}) = {} [{}]", p, z, quantile.region)
    })
}
