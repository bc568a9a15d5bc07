//! Core value and error types.
//!
//! This module provides:
//! - [`SignedFixed`]: signed fixed-point number scaled by [`SCALE`]
//! - [`Rounding`]: rounding mode for fixed-point division
//! - [`GaussError`] / [`ErrorKind`]: structured errors and their categories

pub mod error;
pub mod fixed;

pub use error::{ErrorKind, GaussError, Result};
pub use fixed::{Rounding, SignedFixed, DECIMALS, SCALE};
