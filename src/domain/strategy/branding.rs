//! Branding Model - Logistic branding multiplier over time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Curve, DomainError, ErrorCode, Fraction, ValidationError};

/// Number of time samples in the branding sweep.
pub const BRANDING_SAMPLES: usize = 100;

/// Spacing between time samples.
pub const BRANDING_TIME_STEP: f64 = 0.1;

/// Smallest allowed asymptotic multiple.
pub const MIN_MAX_MULTIPLE: f64 = 2.0;

/// Dial values for the branding model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandInputs {
    /// Asymptotic price multiple a mature brand sustains.
    pub max_multiple: f64,
    /// How quickly the brand approaches its maximum multiple.
    pub compression: f64,
    /// Fraction of brand value kept after dilution.
    pub dilution: f64,
    /// Fraction of brand value kept after underinvestment.
    pub underinvestment: f64,
}

impl BrandInputs {
    /// Checks every dial against its allowed range.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.max_multiple.is_finite() {
            return Err(ValidationError::not_finite("max_multiple", self.max_multiple).into());
        }
        if self.max_multiple < MIN_MAX_MULTIPLE {
            return Err(ValidationError::out_of_range(
                "max_multiple",
                MIN_MAX_MULTIPLE,
                f64::INFINITY,
                self.max_multiple,
            )
            .into());
        }
        if !self.compression.is_finite() {
            return Err(ValidationError::not_finite("compression", self.compression).into());
        }
        if self.compression < 0.0 {
            return Err(ValidationError::out_of_range(
                "compression",
                0.0,
                f64::INFINITY,
                self.compression,
            )
            .into());
        }
        Fraction::try_named("dilution", self.dilution)?;
        Fraction::try_named("underinvestment", self.underinvestment)?;
        Ok(())
    }

    /// Level the multiplier approaches as t grows.
    pub fn asymptote(&self) -> f64 {
        self.max_multiple * self.dilution * self.underinvestment
    }
}

impl Default for BrandInputs {
    fn default() -> Self {
        Self {
            max_multiple: 3.0,
            compression: 0.5,
            dilution: 1.0,
            underinvestment: 1.0,
        }
    }
}

/// Parallel multiplier and surplus-leader-margin curves over the same t.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingCurves {
    pub multiplier_curve: Curve,
    pub slm_curve: Curve,
}

/// Branding functions.
pub struct BrandingModel;

impl BrandingModel {
    /// The fixed time sweep `[0, 10)` in steps of 0.1.
    pub fn time_samples() -> Vec<f64> {
        (0..BRANDING_SAMPLES)
            .map(|i| i as f64 * BRANDING_TIME_STEP)
            .collect()
    }

    /// Branding multiplier b(t).
    pub fn multiplier(inputs: &BrandInputs, t: f64) -> f64 {
        let logistic = inputs.max_multiple
            / (1.0 + (inputs.max_multiple - 1.0) * (-inputs.compression * t).exp());
        logistic * inputs.dilution * inputs.underinvestment
    }

    /// Surplus leader margin 1 - 1/b.
    ///
    /// # Edge Cases
    /// - b = 0: Fails with `ZeroDenominator` (dilution or underinvestment is zero)
    /// - 1/b overflows: Fails with `ZeroDenominator` (b is subnormal)
    /// - b < 1: Negative margin, the brand destroys pricing power
    pub fn surplus_leader_margin(multiplier: f64) -> Result<f64, DomainError> {
        let inverse = 1.0 / multiplier;
        if multiplier == 0.0 || !inverse.is_finite() {
            return Err(DomainError::new(
                ErrorCode::ZeroDenominator,
                "Surplus leader margin is undefined for a vanishing branding multiplier",
            )
            .with_detail("multiplier", multiplier.to_string()));
        }
        Ok(1.0 - inverse)
    }

    /// Computes both curves; any undefined point fails the whole call.
    pub fn compute_curves(inputs: &BrandInputs) -> Result<BrandingCurves, DomainError> {
        inputs.validate()?;

        let ts = Self::time_samples();
        let multipliers: Vec<f64> = ts.iter().map(|&t| Self::multiplier(inputs, t)).collect();
        let margins = multipliers
            .iter()
            .zip(&ts)
            .map(|(&b, &t)| {
                Self::surplus_leader_margin(b).map_err(|e| e.with_detail("t", t.to_string()))
            })
            .collect::<Result<Vec<f64>, DomainError>>()?;

        Ok(BrandingCurves {
            multiplier_curve: Curve::from_xy(ts.iter().copied(), multipliers),
            slm_curve: Curve::from_xy(ts, margins),
        })
    }
}
