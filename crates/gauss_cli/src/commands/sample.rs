//! `sample` and `clt` commands
//!
//! Every draw goes through its own [`SamplerGuard`], so a value printed here
//! is exactly what a single guarded call would have produced.

use gauss_core::sampling::{
    sample_clt, sample_normal_recorded, EntropySource, SampleRecord, SampleSink, SamplerGuard,
    SeededEntropy, TracingSink,
};
use gauss_core::types::SignedFixed;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::emit;
use crate::{CliError, Result};

/// Where the entropy words come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyInput {
    /// Consecutive words starting at the given value
    Fixed(u64),
    /// A reproducible stream seeded with the given value
    Seeded(u64),
}

/// Parameters for [`run`]
#[derive(Debug, Clone)]
pub struct SampleRequest {
    pub entropy: EntropyInput,
    pub count: usize,
    pub mean: Option<SignedFixed>,
    pub std_dev: Option<SignedFixed>,
    pub caller: String,
}

/// The entropy words a request draws from, in order
pub fn entropy_words(entropy: EntropyInput, count: usize) -> Vec<u64> {
    match entropy {
        EntropyInput::Fixed(start) => (0..count as u64).map(|i| start.wrapping_add(i)).collect(),
        EntropyInput::Seeded(seed) => {
            let mut stream = SeededEntropy::from_seed(seed);
            (0..count).map(|_| stream.next_entropy()).collect()
        }
    }
}

/// Draw the requested values, one guard per draw
pub fn draw(request: &SampleRequest, config: &CliConfig) -> Result<Vec<SampleRecord>> {
    if request.count == 0 {
        return Err(CliError::InvalidArgument("count must be at least 1".to_string()));
    }
    let mean = request.mean.unwrap_or(config.mean);
    let std_dev = request.std_dev.unwrap_or(config.std_dev);

    let mut records: Vec<SampleRecord> = Vec::with_capacity(request.count);
    for (i, entropy) in entropy_words(request.entropy, request.count)
        .into_iter()
        .enumerate()
    {
        let mut guard = SamplerGuard::new();
        sample_normal_recorded(
            &mut guard,
            entropy,
            mean,
            std_dev,
            &request.caller,
            &mut records,
        )?;
        debug!(index = i, entropy, "drew sample");
    }
    Ok(records)
}

/// Run the sample command
pub fn run(request: &SampleRequest, config: &CliConfig) -> Result<()> {
    info!(
        "Drawing {} sample(s) for caller '{}'",
        request.count, request.caller
    );
    let records = draw(request, config)?;
    let mut audit = TracingSink;
    for record in &records {
        audit.record(record);
    }
    emit(config.format, &records, || {
        records
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.entropy, r.z, r.value))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[derive(Debug, Serialize)]
struct CltDraw {
    seed: u64,
    value: SignedFixed,
}

/// Run the clt command
pub fn run_clt(seed: u64, config: &CliConfig) -> Result<()> {
    info!("Drawing CLT sample from seed {}", seed);
    let value = sample_clt(seed)?;
    emit(config.format, &CltDraw { seed, value }, || {
        format!("clt({}) = {}", seed, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_core::sampling::sample_normal;

    fn request(entropy: EntropyInput, count: usize) -> SampleRequest {
        SampleRequest {
            entropy,
            count,
            mean: None,
            std_dev: None,
            caller: "test".to_string(),
        }
    }

    #[test]
    fn test_fixed_entropy_matches_kernel() {
        let config = CliConfig::default();
        let records = draw(&request(EntropyInput::Fixed(1 << 63), 2), &config).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entropy, 1 << 63);
        assert_eq!(records[1].entropy, (1 << 63) + 1);
        let expected = sample_normal(1 << 63, SignedFixed::ZERO, SignedFixed::ONE).unwrap();
        assert_eq!(records[0].value, expected);
        assert_eq!(records[0].caller, "test");
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let config = CliConfig::default();
        let a = draw(&request(EntropyInput::Seeded(7), 5), &config).unwrap();
        let b = draw(&request(EntropyInput::Seeded(7), 5), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_entropy_words() {
        assert_eq!(
            entropy_words(EntropyInput::Fixed(u64::MAX), 3),
            vec![u64::MAX, 0, 1]
        );
        let mut stream = SeededEntropy::from_seed(7);
        let expected: Vec<u64> = (0..4).map(|_| stream.next_entropy()).collect();
        assert_eq!(entropy_words(EntropyInput::Seeded(7), 4), expected);
    }

    #[test]
    fn test_seeded_records_follow_stream() {
        let config = CliConfig::default();
        let records = draw(&request(EntropyInput::Seeded(99), 3), &config).unwrap();
        let words: Vec<u64> = records.iter().map(|r| r.entropy).collect();
        assert_eq!(words, entropy_words(EntropyInput::Seeded(99), 3));
        for record in &records {
            assert_eq!(record.z, gauss_core::sampling::sample(record.entropy).unwrap());
        }
    }

    #[test]
    fn test_request_overrides_config() {
        let config = CliConfig::default();
        let mut req = request(EntropyInput::Fixed(1 << 63), 1);
        req.mean = Some(SignedFixed::from_integer(10));
        req.std_dev = Some(SignedFixed::from_integer(2));
        let records = draw(&req, &config).unwrap();
        assert_eq!(records[0].mean, SignedFixed::from_integer(10));
        assert_eq!(records[0].std_dev, SignedFixed::from_integer(2));
    }

    #[test]
    fn test_invalid_requests() {
        let config = CliConfig::default();
        assert!(draw(&request(EntropyInput::Fixed(1), 0), &config).is_err());
        let mut req = request(EntropyInput::Fixed(1), 1);
        req.std_dev = Some(SignedFixed::ZERO);
        assert!(draw(&req, &config).is_err());
    }
}
