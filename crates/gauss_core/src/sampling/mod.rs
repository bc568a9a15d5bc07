//! Deterministic normal sampling.
//!
//! A sample is a pure function of a 64-bit entropy word:
//!
//! 1. [`uniform_open_interval`] maps the word onto `(EPS, 1 - EPS)`.
//! 2. The quantile ([`ppf`](crate::distribution::ppf)) turns it into `z`.
//! 3. [`apply_mean_std`] shifts and scales `z` for a non-standard normal.
//!
//! A [`SamplerGuard`] restricts a caller to one draw, and
//! [`sample_normal_recorded`] reports each draw to a [`SampleSink`].
//!
//! ## Example
//!
//! ```
//! use gauss_core::sampling::{sample_from, SeededEntropy};
//!
//! let mut entropy = SeededEntropy::from_seed(42);
//! let z = sample_from(&mut entropy).unwrap();
//! assert!(z.magnitude() < 7_000_000_000_000_000_000);
//! ```

mod clt;
mod entropy;
mod guard;
mod sampler;
mod sink;
mod uniform;

pub use clt::{sample_clt, Xorshift64};
pub use entropy::{EntropySource, SeededEntropy};
pub use guard::{sample_guarded, sample_normal_guarded, SamplerGuard};
pub use sampler::{apply_mean_std, sample, sample_from, sample_many, sample_normal};
pub use sink::{sample_normal_recorded, NoopSink, SampleRecord, SampleSink, TracingSink};
pub use uniform::{uniform_open_interval, UNIFORM_SPAN};
