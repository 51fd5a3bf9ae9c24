//! Configuration management for the unisim CLI.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with UNISIM_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use unisim_core::{DEFAULT_MAX_QUBITS, MAX_SUPPORTED_QUBITS};

/// Widest matrix entry precision worth printing for an `f64`.
const MAX_PRECISION: usize = 15;

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Engine settings
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// How results are rendered
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Widest circuit accepted; the unitary needs 16 * 4^n bytes.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: usize,
}

/// Output rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "table" or "json"
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Decimal places for table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// How a run result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable matrix table.
    Table,
    /// The JSON run report.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::ValidationError(format!(
                "Invalid output format: {other}"
            ))),
        }
    }
}

// Default value functions

fn default_max_qubits() -> usize {
    DEFAULT_MAX_QUBITS
}

fn default_output_format() -> String {
    "table".to_string()
}

fn default_precision() -> usize {
    4
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: default_max_qubits(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            precision: default_precision(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        let config = config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge `UNISIM_*` environment variables into this configuration.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Merge overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Only variables that are present override the file-loaded (or default)
    /// values.
    pub fn merge_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Simulator
        if let Some(v) = lookup("UNISIM_MAX_QUBITS") {
            self.simulator.max_qubits = parse_env("UNISIM_MAX_QUBITS", &v)?;
        }

        // Output
        if let Some(v) = lookup("UNISIM_OUTPUT_FORMAT") {
            self.output.format = v;
        }
        if let Some(v) = lookup("UNISIM_PRECISION") {
            self.output.precision = parse_env("UNISIM_PRECISION", &v)?;
        }

        // Logging
        if let Some(v) = lookup("UNISIM_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("UNISIM_LOG_FORMAT") {
            self.logging.format = v;
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulator.max_qubits == 0 {
            return Err(ConfigError::ValidationError(
                "max_qubits must be greater than 0".to_string(),
            ));
        }
        if self.simulator.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(ConfigError::ValidationError(format!(
                "max_qubits must be at most {MAX_SUPPORTED_QUBITS}, got {}",
                self.simulator.max_qubits
            )));
        }

        self.output_format()?;

        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.output.precision
            )));
        }

        // Validate log level
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        // Validate log format
        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }

    /// The configured output format.
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.output.format.parse()
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::ValidationError(format!("{key} has invalid value '{value}'")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
