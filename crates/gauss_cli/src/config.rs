//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use std::path::PathBuf;
use std::str::FromStr;

use gauss_core::math::solvers::MAX_REFINEMENT_STEPS;
use gauss_core::types::SignedFixed;
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Standard deviation must be positive, got {0}")]
    InvalidStdDev(SignedFixed),

    #[error("Newton steps must be at most {max}, got {got}")]
    InvalidSteps { got: usize, max: usize },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Default mean for `sample`
    pub mean: SignedFixed,
    /// Default standard deviation for `sample`
    pub std_dev: SignedFixed,
    /// Newton steps applied by `ppf`
    pub newton_steps: usize,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Text,
            mean: SignedFixed::ZERO,
            std_dev: SignedFixed::ONE,
            newton_steps: gauss_core::constants::NEWTON_STEPS,
        }
    }
}

/// Environment variables read by [`CliConfig::from_env_with`]
pub const ENV_LOG_LEVEL: &str = "GAUSS_LOG_LEVEL";
pub const ENV_FORMAT: &str = "GAUSS_FORMAT";
pub const ENV_MEAN: &str = "GAUSS_MEAN";
pub const ENV_STD_DEV: &str = "GAUSS_STD_DEV";
pub const ENV_NEWTON_STEPS: &str = "GAUSS_NEWTON_STEPS";

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

impl CliConfig {
    /// Load a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `GAUSS_*` variables found by `lookup` on top of `self`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }
        if let Some(mean) = lookup(ENV_MEAN) {
            self.mean = parse_value(ENV_MEAN, &mean)?;
        }
        if let Some(std_dev) = lookup(ENV_STD_DEV) {
            self.std_dev = parse_value(ENV_STD_DEV, &std_dev)?;
        }
        if let Some(steps) = lookup(ENV_NEWTON_STEPS) {
            self.newton_steps = parse_value(ENV_NEWTON_STEPS, &steps)?;
        }
        Ok(())
    }

    /// Load configuration from environment variables only
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env_with(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.std_dev.is_zero() || self.std_dev.is_negative() {
            return Err(ConfigError::InvalidStdDev(self.std_dev));
        }
        if self.newton_steps > MAX_REFINEMENT_STEPS {
            return Err(ConfigError::InvalidSteps {
                got: self.newton_steps,
                max: MAX_REFINEMENT_STEPS,
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.format {
            self.format = format.parse()?;
        }
        Ok(())
    }
}

/// Global CLI overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Shorthand for debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an injectable environment
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.mean, SignedFixed::ZERO);
        assert_eq!(config.std_dev, SignedFixed::ONE);
        assert_eq!(config.newton_steps, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("csv").is_err());
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_env_with(env_from(&[
            (ENV_LOG_LEVEL, "info"),
            (ENV_FORMAT, "json"),
            (ENV_MEAN, "-2.5"),
            (ENV_STD_DEV, "0.5"),
            (ENV_NEWTON_STEPS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.mean, "-2.5".parse().unwrap());
        assert_eq!(config.std_dev, "0.5".parse().unwrap());
        assert_eq!(config.newton_steps, 5);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        assert!(CliConfig::from_env_with(env_from(&[(ENV_STD_DEV, "abc")])).is_err());
        assert!(CliConfig::from_env_with(env_from(&[(ENV_STD_DEV, "-1")])).is_err());
        assert!(CliConfig::from_env_with(env_from(&[(ENV_NEWTON_STEPS, "99")])).is_err());
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            format: Some("json".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            format = "json"
            mean = "100"
            std_dev = "15.5"
            newton_steps = 4
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.mean, SignedFixed::from_integer(100));
        assert_eq!(config.std_dev, "15.5".parse().unwrap());
        assert_eq!(config.newton_steps, 4);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.std_dev, SignedFixed::ONE);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_priority_cli_over_env_over_file() {
        let path = std::env::temp_dir().join(format!("gauss_cli_test_{}.toml", std::process::id()));
        std::fs::write(&path, "format = \"json\"\nlog_level = \"info\"\nmean = \"1\"\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let config =
            build_config_with(&cli, env_from(&[(ENV_LOG_LEVEL, "error"), (ENV_MEAN, "2")])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.format, OutputFormat::Json); // file
        assert_eq!(config.mean, SignedFixed::from_integer(2)); // env over file
        assert_eq!(config.log_level, LogLevel::Trace); // cli over env
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/gauss.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, |_| None),
            Err(ConfigError::FileError(_))
        ));
    }
}
