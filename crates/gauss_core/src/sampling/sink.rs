//! Structured records of drawn samples.
//!
//! Every successful draw made through [`sample_normal_recorded`] is handed to
//! a [`SampleSink`] as a [`SampleRecord`]. Sinks are plain trait objects so
//! callers can log, collect or discard records.

use tracing::info;

use super::guard::SamplerGuard;
use crate::types::{Result, SignedFixed};

/// A drawn value together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleRecord {
    /// Identifier of the requesting party.
    pub caller: String,
    /// Entropy word the value was drawn from.
    pub entropy: u64,
    /// Standard normal variate before scaling.
    pub z: SignedFixed,
    /// The drawn value, `mean + std_dev * z`.
    pub value: SignedFixed,
    /// Mean applied.
    pub mean: SignedFixed,
    /// Standard deviation applied.
    pub std_dev: SignedFixed,
}

/// Destination for sample records.
pub trait SampleSink {
    /// Accept one record.
    fn record(&mut self, record: &SampleRecord);
}

/// Emits each record as an `info` tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SampleSink for TracingSink {
    fn record(&mut self, record: &SampleRecord) {
        info!(
            caller = %record.caller,
            entropy = record.entropy,
            z = %record.z,
            value = %record.value,
            mean = %record.mean,
            std_dev = %record.std_dev,
            "sample drawn"
        );
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl SampleSink for NoopSink {
    fn record(&mut self, _record: &SampleRecord) {}
}

impl SampleSink for Vec<SampleRecord> {
    fn record(&mut self, record: &SampleRecord) {
        self.push(record.clone());
    }
}

/// Guarded affine draw that reports the result to `sink`.
///
/// Nothing is recorded when the draw fails.
///
/// # Example
///
/// ```
/// use gauss_core::sampling::{sample_normal_recorded, SampleRecord, SamplerGuard};
/// use gauss_core::types::SignedFixed;
///
/// let mut records: Vec<SampleRecord> = Vec::new();
/// let mut guard = SamplerGuard::new();
/// let x = sample_normal_recorded(
///     &mut guard,
///     7,
///     SignedFixed::ZERO,
///     SignedFixed::ONE,
///     "desk-a",
///     &mut records,
/// )
/// .unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].value, x);
/// assert_eq!(records[0].z, gauss_core::sampling::sample(7).unwrap());
/// ```
pub fn sample_normal_recorded(
    guard: &mut SamplerGuard,
    entropy: u64,
    mean: SignedFixed,
    std_dev: SignedFixed,
    caller: &str,
    sink: &mut dyn SampleSink,
) -> Result<SignedFixed> {
    let (z, value) = guard.sample_normal_parts(entropy, mean, std_dev)?;
    sink.record(&SampleRecord {
        caller: caller.to_string(),
        entropy,
        z,
        value,
        mean,
        std_dev,
    });
    Ok(value)
}
