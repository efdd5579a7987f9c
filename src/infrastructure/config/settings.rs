//! Application configuration loading and validation.
//!
//! Configuration is optional: a missing file yields [`Config::default`].
//! Exchange rates and tax brackets are fixed and cannot be configured here.
//!
//! # Example
//!
//! ```no_run
//! use frontier::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0, false);
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::domain::Currency;
use crate::error::{ConfigError, Result};

/// Defaults for the interactive planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlanConfig {
    /// Currency code to use instead of prompting (e.g. `"USD"`).
    #[serde(default)]
    pub currency: Option<String>,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Planner defaults.
    #[serde(default)]
    pub plan: PlanConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration, falling back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for any failure other than a missing file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::ReadFile(err).into()),
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(code) = &self.plan.currency {
            code.parse::<Currency>()
                .map_err(|err| ConfigError::InvalidValue {
                    field: "plan.currency",
                    reason: err.to_string(),
                })?;
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// The configured default currency, if any.
    #[must_use]
    pub fn default_currency(&self) -> Option<Currency> {
        self.plan.currency.as_deref().and_then(|code| code.parse().ok())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, verbosity: u8, ansi: bool) {
        self.logging.init(verbosity, ansi);
    }
}
