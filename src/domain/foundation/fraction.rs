//! Fraction value object (0.0-1.0 scale).

use super::ValidationError;

/// A finite value between 0.0 and 1.0 inclusive.
///
/// Dials such as cost of capital, market share and margin are entered as
/// percentages on the dashboard but the formulas work on fractions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fraction(f64);

impl Fraction {
    /// Creates a Fraction for a named dial, so errors point at the field.
    pub fn try_named(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite(field, value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Creates a Fraction from a percentage on the 0-100 scale.
    pub fn from_percent(percent: f64) -> Result<Self, ValidationError> {
        if !percent.is_finite() {
            return Err(ValidationError::not_finite("percent", percent));
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(ValidationError::out_of_range("percent", 0.0, 100.0, percent));
        }
        Ok(Self(percent / 100.0))
    }

    /// Returns the value as a fraction.
    pub fn value(&self) -> f64 {
        self.0
    }
}
