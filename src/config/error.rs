//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid {section} dial defaults: {reason}")]
    InvalidDial {
        section: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Creates an invalid dial error for a config section.
    pub fn invalid_dial(section: &'static str, reason: impl ToString) -> Self {
        ValidationError::InvalidDial {
            section,
            reason: reason.to_string(),
        }
    }
}
