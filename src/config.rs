//! Configuration management for the `JourneyAI` conformance gate
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::JourneyAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `JourneyAI` gate
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GateConfig {
    /// Plausibility limits applied by the validator
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Plausibility limits for contextual fields
///
/// Temperature bounds are deployment policy rather than schema data:
/// what counts as a plausible celsius reading depends on where the
/// itineraries are generated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Lowest plausible temperature in celsius
    #[serde(default = "default_temperature_min")]
    pub temperature_min_c: f64,
    /// Highest plausible temperature in celsius
    #[serde(default = "default_temperature_max")]
    pub temperature_max_c: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_temperature_min() -> f64 {
    -60.0
}

fn default_temperature_max() -> f64 {
    60.0
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            temperature_min_c: default_temperature_min(),
            temperature_max_c: default_temperature_max(),
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

impl GateConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with JOURNEYAI_ prefix
        builder = builder.add_source(
            Environment::with_prefix("JOURNEYAI")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GateConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("journeyai").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_limits()?;
        self.validate_logging()?;
        Ok(())
    }

    /// Validate plausibility limits
    fn validate_limits(&self) -> Result<()> {
        if self.limits.temperature_min_c >= self.limits.temperature_max_c {
            return Err(
                JourneyAiError::config("Temperature minimum must be below the maximum").into(),
            );
        }

        if self.limits.temperature_min_c < -273.15 {
            return Err(
                JourneyAiError::config("Temperature minimum cannot be below absolute zero").into(),
            );
        }

        Ok(())
    }

    /// Install a global tracing subscriber honoring the logging settings.
    ///
    /// Intended for embedding applications and test harnesses. The
    /// `RUST_LOG` environment variable takes precedence over the
    /// configured level. Fails if a subscriber is already installed.
    pub fn init_logging(&self) -> Result<()> {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(self.logging.level.clone()));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        let result = if self.logging.format == "json" {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        result.map_err(|error| {
            JourneyAiError::general(format!("Failed to install tracing subscriber: {error}"))
                .into()
        })
    }

    /// Validate logging configuration values
    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(JourneyAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(JourneyAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
