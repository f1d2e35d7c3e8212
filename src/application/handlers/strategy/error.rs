//! Errors surfaced by the strategy dial handlers.

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::ports::ChartError;

/// Failure of a dial evaluation, either in the formula or while rendering.
#[derive(Debug, Error)]
pub enum DialError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Chart rendering failed: {0}")]
    Chart(#[from] ChartError),
}

impl DialError {
    /// Returns the domain error, if the formula itself failed.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            DialError::Domain(err) => Some(err),
            DialError::Chart(_) => None,
        }
    }
}
