//! # gauss_core: Deterministic Fixed-Point Normal Distribution
//!
//! gauss_core evaluates the standard normal distribution using integer
//! arithmetic only, so every result is bit-for-bit reproducible:
//! - Cumulative distribution, density and error function (`distribution`)
//! - Quantile function with region dispatch and Newton refinement (`distribution`)
//! - Sampling from 64-bit entropy, with a single-use guard (`sampling`)
//! - Fixed-point value and error types (`types`)
//!
//! ## Fixed-Point Convention
//!
//! Real numbers are integers scaled by `10^18`. Probabilities and densities
//! are `u128`; signed quantities are [`types::SignedFixed`]. No floating point
//! is used on any evaluation path.
//!
//! ## Usage Examples
//!
//! ```rust
//! use gauss_core::distribution::{cdf, ppf};
//! use gauss_core::sampling::{sample_normal, SamplerGuard};
//! use gauss_core::types::{SignedFixed, SCALE};
//!
//! // Forward and inverse
//! let p = cdf("1.5".parse().unwrap()).unwrap();
//! let z = ppf(p).unwrap();
//! assert!(z.magnitude().abs_diff(3 * SCALE / 2) < 1_000_000_000);
//!
//! // One guarded draw
//! let mut guard = SamplerGuard::new();
//! let x = guard
//!     .sample_normal(0xdead_beef, SignedFixed::from_integer(100), SignedFixed::from_integer(15))
//!     .unwrap();
//! assert!(guard.sample(1).is_err());
//! # let _ = (x, sample_normal);
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events (quantile region selection, degenerate
//! fallbacks, guard replays, sample records) and never installs a
//! subscriber; binaries decide where events go.
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialisation for values, metadata and vectors

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod checksum;
pub mod coefficients;
pub mod constants;
pub mod distribution;
pub mod math;
pub mod metadata;
pub mod sampling;
pub mod types;
pub mod vectors;
