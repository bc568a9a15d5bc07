//! Standard normal distribution in fixed point.
//!
//! - Forward: [`cdf`], [`pdf`], [`erf`], [`erfc`]
//! - Inverse: [`ppf`], [`checked_ppf`], [`ppf_with`], [`initial_estimate`]
//!
//! Probabilities and densities are unsigned scaled integers; arguments and
//! quantiles are [`SignedFixed`](crate::types::SignedFixed).

mod forward;
mod inverse;

pub use forward::{cdf, erf, erfc, pdf};
pub use inverse::{checked_ppf, initial_estimate, ppf, ppf_with, Region, PPF_MAX, PPF_MIN};
