//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! strategy dials domain.

mod curve;
mod errors;
mod fraction;

pub use curve::{Curve, CurvePoint};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fraction::Fraction;
