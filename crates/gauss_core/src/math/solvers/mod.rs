//! Iterative refinement for fixed-point estimates.
//!
//! ## Available Refiners
//!
//! - [`NewtonRefiner`]: fixed-step Newton iteration with a derivative guard
//!
//! ## Configuration
//!
//! [`RefinementConfig`] controls:
//! - `steps`: number of Newton steps attempted (default: 3)
//! - `min_density`: derivative guard below which a step is skipped (default: 1e-9)
//! - `max_magnitude`: ceiling applied after every step (default: 6)
//!
//! The iteration count is fixed rather than tolerance driven, so a refined
//! value depends only on its input.

mod config;
mod newton;

pub use config::{RefinementConfig, MAX_REFINEMENT_STEPS};
pub use newton::NewtonRefiner;
