#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for sumcheck
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/sumcheck/config.toml)
//! - Environment variables
//! - CLI flags (applied by the binary)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use sumcheck_errors::{ConfigError, Error};
use sumcheck_types::{ColorChoice, OutputFormat};
use tracing::debug;

/// Glob used to find manifest files when nothing else is configured
pub const DEFAULT_MANIFEST_PATTERN: &str = "md5sum*.txt";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_output_format")]
    pub output: OutputFormat,
    #[serde(default = "default_color_choice")]
    pub color: ColorChoice,
}

/// Verification behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// File-name glob for manifest discovery
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Exit with status 2 when any entry failed verification
    #[serde(default)]
    pub fail_exit: bool,
}

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    pub log_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Tty,
            color: ColorChoice::Auto,
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            fail_exit: false,
        }
    }
}

// Default value functions for serde
fn default_output_format() -> OutputFormat {
    OutputFormat::Tty
}

fn default_color_choice() -> ColorChoice {
    ColorChoice::Auto
}

fn default_pattern() -> String {
    DEFAULT_MANIFEST_PATTERN.to_string()
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("sumcheck").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub fn load() -> Result<Self, Error> {
        let Ok(config_path) = Self::default_path() else {
            debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // SUMCHECK_OUTPUT
        if let Ok(output) = std::env::var("SUMCHECK_OUTPUT") {
            self.general.output = match output.as_str() {
                "plain" => OutputFormat::Plain,
                "tty" => OutputFormat::Tty,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "SUMCHECK_OUTPUT".to_string(),
                        value: output,
                    }
                    .into())
                }
            };
        }

        // SUMCHECK_COLOR
        if let Ok(color) = std::env::var("SUMCHECK_COLOR") {
            self.general.color = match color.as_str() {
                "always" => ColorChoice::Always,
                "auto" => ColorChoice::Auto,
                "never" => ColorChoice::Never,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "SUMCHECK_COLOR".to_string(),
                        value: color,
                    }
                    .into())
                }
            };
        }

        // SUMCHECK_PATTERN
        if let Ok(pattern) = std::env::var("SUMCHECK_PATTERN") {
            if pattern.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "SUMCHECK_PATTERN".to_string(),
                    value: pattern,
                }
                .into());
            }
            self.verify.pattern = pattern;
        }

        // SUMCHECK_FAIL_EXIT
        if let Ok(fail_exit) = std::env::var("SUMCHECK_FAIL_EXIT") {
            self.verify.fail_exit = match fail_exit.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "SUMCHECK_FAIL_EXIT".to_string(),
                        value: fail_exit,
                    }
                    .into())
                }
            };
        }

        Ok(())
    }

    /// Get the log directory (with default)
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.paths.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("sumcheck")
                .join("logs")
        })
    }
}
