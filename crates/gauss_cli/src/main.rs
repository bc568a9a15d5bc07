//! Gauss CLI - fixed-point normal distribution from the command line
//!
//! Thin operational front end over `gauss_core`.
//!
//! # Commands
//!
//! - `gauss cdf|pdf|erf|erfc --x <value>` - Evaluate a forward function
//! - `gauss ppf --p <probability>` - Compute a quantile
//! - `gauss sample --entropy <word> | --seed <seed>` - Draw guarded samples
//! - `gauss clt --seed <seed>` - Draw from the CLT fallback generator
//! - `gauss metadata` - Report constants and table fingerprints
//! - `gauss vectors` - Generate conformance vectors
//! - `gauss check [--vectors <file>]` - Verify conformance vectors
//!
//! # Configuration
//!
//! Settings are resolved from CLI flags, then `GAUSS_*` environment
//! variables, then an optional TOML file, then defaults.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use gauss_core::types::SignedFixed;
use gauss_core::vectors::VectorConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::evaluate::Function;
use commands::sample::{EntropyInput, SampleRequest};
use config::{build_config, CliArgs};

/// Fixed-point normal distribution CLI
#[derive(Parser)]
#[command(name = "gauss")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Standard normal CDF
    Cdf {
        /// Argument as a decimal, e.g. -1.25
        #[arg(short, long, allow_hyphen_values = true)]
        x: SignedFixed,
    },

    /// Standard normal PDF
    Pdf {
        /// Argument as a decimal
        #[arg(short, long, allow_hyphen_values = true)]
        x: SignedFixed,
    },

    /// Error function
    Erf {
        /// Argument as a decimal
        #[arg(short, long, allow_hyphen_values = true)]
        x: SignedFixed,
    },

    /// Complementary error function
    Erfc {
        /// Argument as a decimal
        #[arg(short, long, allow_hyphen_values = true)]
        x: SignedFixed,
    },

    /// Inverse CDF
    Ppf {
        /// Probability as a decimal in (0, 1)
        #[arg(short, long)]
        p: SignedFixed,

        /// Newton steps (overrides configuration)
        #[arg(short, long)]
        steps: Option<usize>,
    },

    /// Draw guarded normal samples
    #[command(group(ArgGroup::new("source").required(true).args(["entropy", "seed"])))]
    Sample {
        /// Entropy word for the first draw; later draws use consecutive words
        #[arg(short, long)]
        entropy: Option<u64>,

        /// Seed for a reproducible entropy stream
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Mean (overrides configuration)
        #[arg(short, long, allow_hyphen_values = true)]
        mean: Option<SignedFixed>,

        /// Standard deviation (overrides configuration)
        #[arg(short = 'd', long)]
        std_dev: Option<SignedFixed>,

        /// Caller identifier attached to each record
        #[arg(long, default_value = "cli")]
        caller: String,
    },

    /// Draw from the CLT fallback generator
    Clt {
        /// Seed (zero is treated as one)
        #[arg(short, long)]
        seed: u64,
    },

    /// Report constants and coefficient table fingerprints
    Metadata,

    /// Generate conformance vectors as JSON
    Vectors {
        /// Evenly spaced z points on [-6, 6]
        #[arg(long, default_value = "49")]
        z_points: usize,

        /// Evenly spaced probabilities on [0.02, 0.98]
        #[arg(long, default_value = "49")]
        central_points: usize,

        /// Tail decades below 0.01
        #[arg(long, default_value = "8")]
        tail_decades: u32,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify conformance vectors against this build
    Check {
        /// Vector file produced by `gauss vectors`
        #[arg(long)]
        vectors: Option<PathBuf>,
    },
}

/// Initialise the tracing subscriber, preferring `RUST_LOG` when set
fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
        verbose: cli.verbose,
    };
    let config = build_config(&args)?;

    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Cdf { x } => commands::evaluate::run(Function::Cdf, x, &config),
        Commands::Pdf { x } => commands::evaluate::run(Function::Pdf, x, &config),
        Commands::Erf { x } => commands::evaluate::run(Function::Erf, x, &config),
        Commands::Erfc { x } => commands::evaluate::run(Function::Erfc, x, &config),
        Commands::Ppf { p, steps } => commands::quantile::run(p, steps, &config),
        Commands::Sample {
            entropy,
            seed,
            count,
            mean,
            std_dev,
            caller,
        } => {
            let entropy = match (entropy, seed) {
                (Some(word), _) => EntropyInput::Fixed(word),
                (None, Some(seed)) => EntropyInput::Seeded(seed),
                (None, None) => {
                    return Err(CliError::InvalidArgument(
                        "one of --entropy or --seed is required".to_string(),
                    ))
                }
            };
            let request = SampleRequest {
                entropy,
                count,
                mean,
                std_dev,
                caller,
            };
            commands::sample::run(&request, &config)
        }
        Commands::Clt { seed } => commands::sample::run_clt(seed, &config),
        Commands::Metadata => commands::metadata::run(&config),
        Commands::Vectors {
            z_points,
            central_points,
            tail_decades,
            output,
        } => {
            let vector_config = VectorConfig {
                z_points,
                central_points,
                tail_decades,
            };
            commands::vectors::run(&vector_config, output.as_deref())
        }
        Commands::Check { vectors } => commands::check::run(vectors.as_deref(), &config),
    }
}
