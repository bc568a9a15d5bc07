//! Fixed-step Newton refinement in fixed point.

use tracing::trace;

use super::RefinementConfig;
use crate::math::arithmetic::{clamp_magnitude, div_signed, signed_sub};
use crate::types::{Result, Rounding, SignedFixed};

/// Newton refiner with a density guard and magnitude clamp.
///
/// Each step computes `x <- x - f(x) / f'(x)` where `f'(x)` is known to be
/// non-negative. A step whose derivative falls below
/// [`RefinementConfig::min_density`] is skipped rather than aborting, and the
/// iterate is clamped to [`RefinementConfig::max_magnitude`] after every step
/// that is applied.
///
/// # Example
///
/// ```
/// use gauss_core::math::solvers::{NewtonRefiner, RefinementConfig};
/// use gauss_core::math::arithmetic::{mul_signed, signed_sub};
/// use gauss_core::types::{SignedFixed, SCALE};
///
/// // Solve x^2 - 2 = 0 starting from 1.5
/// let refiner = NewtonRefiner::new(RefinementConfig::new(4, 1).unwrap());
/// let two = SignedFixed::from_integer(2);
/// let f = |x: SignedFixed| signed_sub(mul_signed(x, x)?, two);
/// let f_prime = |x: SignedFixed| Ok(2 * x.magnitude());
///
/// let root = refiner.refine(f, f_prime, SignedFixed::positive(3 * SCALE / 2)).unwrap();
/// assert!(root.magnitude().abs_diff(1_414_213_562_373_095_048) < 10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRefiner {
    config: RefinementConfig,
}

impl NewtonRefiner {
    /// Create a refiner with the given configuration.
    pub fn new(config: RefinementConfig) -> Self {
        Self { config }
    }

    /// Create a refiner with the default three-step configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: RefinementConfig::default(),
        }
    }

    /// Run the configured number of steps from `x0`.
    ///
    /// # Arguments
    ///
    /// * `f` - Residual whose root is sought
    /// * `f_prime` - Non-negative derivative of `f`
    /// * `x0` - Initial estimate
    ///
    /// # Errors
    ///
    /// Propagates any error raised by `f`, `f_prime` or the fixed-point
    /// arithmetic; the density guard never raises.
    pub fn refine<F, G>(&self, f: F, f_prime: G, x0: SignedFixed) -> Result<SignedFixed>
    where
        F: Fn(SignedFixed) -> Result<SignedFixed>,
        G: Fn(SignedFixed) -> Result<u128>,
    {
        let mut x = x0;
        for step in 0..self.config.steps {
            let slope = f_prime(x)?;
            if slope < self.config.min_density {
                trace!(step, slope, "derivative below guard, step skipped");
                continue;
            }
            let residual = f(x)?;
            let delta = div_signed(residual, SignedFixed::positive(slope), Rounding::Down)?;
            x = clamp_magnitude(signed_sub(x, delta)?, self.config.max_magnitude);
            trace!(step, %x, %delta, "newton step applied");
        }
        Ok(x)
    }

    /// Returns a reference to the refiner configuration.
    pub fn config(&self) -> &RefinementConfig {
        &self.config
    }
}

impl Default for NewtonRefiner {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::arithmetic::mul_signed;
    use crate::types::SCALE;
    use std::cell::Cell;

    #[test]
    fn test_linear_root_in_one_step() {
        // f(x) = 2x - 1, root 0.5
        let refiner = NewtonRefiner::new(RefinementConfig::new(1, 1).unwrap());
        let f = |x: SignedFixed| signed_sub(mul_signed(x, SignedFixed::from_integer(2))?, SignedFixed::ONE);
        let f_prime = |_: SignedFixed| Ok(2 * SCALE);
        let root = refiner.refine(f, f_prime, SignedFixed::from_integer(-3)).unwrap();
        assert_eq!(root, SignedFixed::positive(SCALE / 2));
    }

    #[test]
    fn test_zero_steps_returns_initial() {
        let refiner = NewtonRefiner::new(RefinementConfig::unrefined());
        let x0 = SignedFixed::from_integer(4);
        let root = refiner
            .refine(|_| Ok(SignedFixed::ONE), |_| Ok(SCALE), x0)
            .unwrap();
        assert_eq!(root, x0);
    }

    #[test]
    fn test_low_derivative_skips_without_evaluating_residual() {
        let calls = Cell::new(0);
        let refiner = NewtonRefiner::with_defaults();
        let x0 = SignedFixed::from_integer(7);
        let root = refiner
            .refine(
                |_| {
                    calls.set(calls.get() + 1);
                    Ok(SignedFixed::ONE)
                },
                |_| Ok(0),
                x0,
            )
            .unwrap();
        assert_eq!(root, x0, "skipped steps leave the iterate unchanged");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_applied_step_is_clamped() {
        // A huge residual would push the iterate far past the ceiling.
        let refiner = NewtonRefiner::new(RefinementConfig::new(1, 1).unwrap());
        let root = refiner
            .refine(
                |_| Ok(SignedFixed::from_integer(1_000)),
                |_| Ok(SCALE),
                SignedFixed::ZERO,
            )
            .unwrap();
        assert_eq!(root, SignedFixed::negative(6 * SCALE));
    }

    #[test]
    fn test_errors_propagate() {
        let refiner = NewtonRefiner::with_defaults();
        let result = refiner.refine(
            |_| Err(crate::types::GaussError::DivisionByZero),
            |_| Ok(SCALE),
            SignedFixed::ZERO,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_accessor() {
        let refiner = NewtonRefiner::default();
        assert_eq!(refiner.config(), &RefinementConfig::default());
    }
}
