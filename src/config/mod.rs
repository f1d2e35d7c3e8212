//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Dial defaults can come from an optional config file
//! and are overridden by environment variables with the `DIALS` prefix;
//! nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use strategy_dials::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Market size: {}bn", config.scale.market_size);
//! ```

mod chart;
mod error;
mod logging;

pub use chart::ChartConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use std::path::Path;

use serde::Deserialize;

use crate::domain::strategy::{BrandInputs, NetworkInputs, ScaleInputs, ScalePowerModel};

/// Root application configuration
///
/// Every section has defaults matching the original dashboard, so an empty
/// environment yields a usable configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default dials for the scale-power model
    #[serde(default)]
    pub scale: ScaleInputs,

    /// Default dials for the network effect model
    #[serde(default)]
    pub network: NetworkInputs,

    /// Default dials for the branding model
    #[serde(default)]
    pub branding: BrandInputs,

    /// Chart output options
    #[serde(default)]
    pub chart: ChartConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `DIALS__SCALE__MARKET_SIZE=500` -> `scale.market_size = 500`
    /// - `DIALS__CHART__FORMAT=json` -> `chart.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an optional file, then environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the config file if given (format inferred from extension)
    /// 3. Reads environment variables with `DIALS` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or unreadable, or if
    /// values cannot be parsed into expected types.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("DIALS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Dial defaults must be valid model inputs, so a misconfigured default
    /// is reported at startup rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;

        self.scale
            .validate()
            .and_then(|_| {
                ScalePowerModel::growth_factor(self.scale.cost_of_capital, self.scale.growth_rate)
            })
            .map_err(|e| ValidationError::invalid_dial("scale", e))?;
        self.network
            .validate()
            .map_err(|e| ValidationError::invalid_dial("network", e))?;
        self.branding
            .validate()
            .map_err(|e| ValidationError::invalid_dial("branding", e))?;

        Ok(())
    }
}
