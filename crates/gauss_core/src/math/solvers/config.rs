//! Refinement configuration.

use crate::constants::{MAX_Z, MIN_DENSITY, NEWTON_STEPS};
use crate::types::{GaussError, Result};

/// Upper bound accepted for [`RefinementConfig::steps`].
pub const MAX_REFINEMENT_STEPS: usize = 32;

/// Settings for the fixed-step Newton refinement of quantile estimates.
///
/// Unlike a tolerance-driven solver, refinement always runs exactly
/// `steps` iterations so that the result is a pure function of the input.
///
/// # Example
///
/// ```
/// use gauss_core::math::solvers::RefinementConfig;
///
/// let config = RefinementConfig::default();
/// assert_eq!(config.steps, 3);
/// assert_eq!(config.min_density, 1_000_000_000);
///
/// let custom = RefinementConfig::new(5, 1_000).unwrap();
/// assert_eq!(custom.steps, 5);
/// assert!(RefinementConfig::new(3, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefinementConfig {
    /// Number of Newton steps attempted.
    pub steps: usize,

    /// Steps are skipped while the derivative is below this scaled value.
    pub min_density: u128,

    /// Magnitude ceiling applied to the iterate after every applied step.
    pub max_magnitude: u128,
}

impl Default for RefinementConfig {
    /// Three steps, density guard `1e-9`, ceiling `6`.
    fn default() -> Self {
        Self {
            steps: NEWTON_STEPS,
            min_density: MIN_DENSITY,
            max_magnitude: MAX_Z,
        }
    }
}

impl RefinementConfig {
    /// Create a configuration with the default magnitude ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`GaussError::InvalidConfig`] if `min_density` is zero or
    /// `steps` exceeds [`MAX_REFINEMENT_STEPS`].
    pub fn new(steps: usize, min_density: u128) -> Result<Self> {
        let config = Self {
            steps,
            min_density,
            max_magnitude: MAX_Z,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration that leaves the initial estimate untouched.
    pub fn unrefined() -> Self {
        Self {
            steps: 0,
            ..Self::default()
        }
    }

    /// Check the invariants a refiner relies on.
    pub fn validate(&self) -> Result<()> {
        if self.min_density == 0 {
            return Err(GaussError::InvalidConfig(
                "min_density must be positive".to_string(),
            ));
        }
        if self.steps > MAX_REFINEMENT_STEPS {
            return Err(GaussError::InvalidConfig(format!(
                "steps must be at most {}, got {}",
                MAX_REFINEMENT_STEPS, self.steps
            )));
        }
        if self.max_magnitude == 0 {
            return Err(GaussError::InvalidConfig(
                "max_magnitude must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
