//! Numeric constants shared by every module, all scaled by [`SCALE`].

pub use crate::types::SCALE;

/// One half.
pub const HALF: u128 = SCALE / 2;

/// Largest `|z|` at which the forward functions are evaluated.
pub const MAX_Z: u128 = 6 * SCALE;

/// Distance of the uniform sampling interval from 0 and 1 (`1e-10`).
pub const EPS: u128 = 100_000_000;

/// Lower boundary of the central quantile region (`0.02`).
pub const P_LOW: u128 = 20_000_000_000_000_000;

/// Upper boundary of the central quantile region (`0.98`).
pub const P_HIGH: u128 = 980_000_000_000_000_000;

/// Default number of Newton refinement steps applied to a quantile estimate.
pub const NEWTON_STEPS: usize = 3;

/// Densities below this (`1e-9`) skip a refinement step.
pub const MIN_DENSITY: u128 = 1_000_000_000;

/// `ln 2`, truncated.
pub const LN_2: u128 = 693_147_180_559_945_309;

/// `sqrt 2`, truncated.
pub const SQRT_2: u128 = 1_414_213_562_373_095_048;

/// Number of uniforms summed by the central-limit fallback.
pub const CLT_TERMS: usize = 12;

/// Precision class advertised in metadata.
pub const PRECISION_CLASS: &str = "wad-1e18";
