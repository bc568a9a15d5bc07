//! Error types for structured error handling.
//!
//! This module provides:
//! - `GaussError`: every failure raised by the fixed-point kernel
//! - `ErrorKind`: the coarse category a caller branches on
//! - `Result`: crate-wide result alias

use thiserror::Error;

use super::fixed::SignedFixed;

/// Coarse failure category.
///
/// # Variants
/// - `Domain`: an input lies outside the mathematical domain of the operation
/// - `Arithmetic`: an intermediate could not be represented or divided
/// - `Configuration`: caller-supplied parameters are unusable
/// - `Replay`: a single-use guard was presented twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Input outside the domain of the operation.
    Domain,
    /// Overflow or division failure.
    Arithmetic,
    /// Invalid caller-supplied parameters.
    Configuration,
    /// Single-use guard reused.
    Replay,
}

/// Errors raised by the fixed-point distribution kernel.
///
/// # Examples
/// ```
/// use gauss_core::types::{ErrorKind, GaussError};
///
/// let err = GaussError::ProbabilityOutOfDomain {
///     p: 0,
///     min: 100_000_000,
///     max: 999_999_999_900_000_000,
/// };
/// assert_eq!(err.kind(), ErrorKind::Domain);
/// assert!(format!("{}", err).contains("outside domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    /// Probability outside the open-interval domain accepted by the quantile.
    #[error("Probability {p} outside domain [{min}, {max}]")]
    ProbabilityOutOfDomain {
        /// The rejected probability, scaled
        p: u128,
        /// Smallest accepted probability
        min: u128,
        /// Largest accepted probability
        max: u128,
    },

    /// Text could not be parsed as a fixed-point decimal.
    #[error("Invalid fixed-point literal: {0}")]
    InvalidLiteral(String),

    /// Fixed-point division with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// A rational approximation's denominator evaluated to zero.
    #[error("Rational denominator evaluated to zero at x = {x}")]
    DenominatorZero {
        /// Evaluation point, scaled
        x: u128,
    },

    /// An intermediate or result does not fit its representation.
    #[error("Arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),

    /// Natural logarithm requested for zero.
    #[error("Logarithm of non-positive value")]
    NonPositiveLogarithm,

    /// Standard deviation must be strictly positive.
    #[error("Standard deviation must be positive, got {0}")]
    InvalidStdDev(SignedFixed),

    /// Refinement configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sampler guard already consumed.
    #[error("Sampler guard already used")]
    GuardAlreadyUsed,
}

impl GaussError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GaussError::ProbabilityOutOfDomain { .. }
            | GaussError::InvalidLiteral(_)
            | GaussError::NonPositiveLogarithm => ErrorKind::Domain,
            GaussError::DivisionByZero
            | GaussError::DenominatorZero { .. }
            | GaussError::ArithmeticOverflow(_) => ErrorKind::Arithmetic,
            GaussError::InvalidStdDev(_) | GaussError::InvalidConfig(_) => {
                ErrorKind::Configuration
            }
            GaussError::GuardAlreadyUsed => ErrorKind::Replay,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaussError>;
