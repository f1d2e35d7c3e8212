//! Scale-Power Value Model - Terminal value from market scale and power.
//!
//! V = M0 · g · s · m, where g = (1 + growth) / (cost of capital - growth)
//! is the perpetuity growth factor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Fraction, ValidationError};

/// Market size inputs are expressed in billions of currency units.
pub const BILLION: f64 = 1_000_000_000.0;

/// Dial values for the scale-power model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleInputs {
    /// Current market size, in billions.
    pub market_size: f64,
    /// Discount rate as a fraction.
    pub cost_of_capital: f64,
    /// Long-term revenue growth as a fraction; must stay below cost of capital.
    pub growth_rate: f64,
    /// Long-term market share as a fraction.
    pub market_share: f64,
    /// Long-term net profit margin above cost of capital, as a fraction.
    pub margin: f64,
}

impl ScaleInputs {
    /// Checks every dial against its allowed range.
    ///
    /// The growth/cost-of-capital ordering is checked separately by
    /// [`ScalePowerModel::growth_factor`] since it is a formula precondition.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.market_size.is_finite() {
            return Err(ValidationError::not_finite("market_size", self.market_size).into());
        }
        if self.market_size < 0.0 {
            return Err(ValidationError::out_of_range(
                "market_size",
                0.0,
                f64::INFINITY,
                self.market_size,
            )
            .into());
        }
        Fraction::try_named("cost_of_capital", self.cost_of_capital)?;
        Fraction::try_named("growth_rate", self.growth_rate)?;
        Fraction::try_named("market_share", self.market_share)?;
        Fraction::try_named("margin", self.margin)?;
        Ok(())
    }
}

impl Default for ScaleInputs {
    fn default() -> Self {
        Self {
            market_size: 400.0,
            cost_of_capital: 0.20,
            growth_rate: 0.05,
            market_share: 0.30,
            margin: 0.10,
        }
    }
}

/// Computed scale-power metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleValue {
    /// Perpetuity growth multiplier g.
    pub growth_factor: f64,
    /// Market size (in currency units) times g.
    pub market_scale_contribution: f64,
    /// Share times margin, as a fraction.
    pub extractive_power: f64,
    /// Long-term value accretion potential.
    pub total_value: f64,
}

/// Scale-power value functions.
pub struct ScalePowerModel;

impl ScalePowerModel {
    /// Computes the perpetuity growth factor (1 + growth) / (coc - growth).
    ///
    /// # Edge Cases
    /// - growth == cost of capital: Fails with `UndefinedGrowthFactor`
    /// - growth > cost of capital: Fails with `UndefinedGrowthFactor`
    /// - growth a hair below cost of capital: Valid, very large factor
    pub fn growth_factor(cost_of_capital: f64, growth_rate: f64) -> Result<f64, DomainError> {
        if growth_rate >= cost_of_capital {
            return Err(DomainError::new(
                ErrorCode::UndefinedGrowthFactor,
                "Growth rate must be strictly below the cost of capital",
            )
            .with_detail("cost_of_capital", cost_of_capital.to_string())
            .with_detail("growth_rate", growth_rate.to_string()));
        }

        Ok((1.0 + growth_rate) / (cost_of_capital - growth_rate))
    }

    /// Computes market scale contribution, extractive power and total value.
    pub fn compute(inputs: &ScaleInputs) -> Result<ScaleValue, DomainError> {
        inputs.validate()?;

        let growth_factor = Self::growth_factor(inputs.cost_of_capital, inputs.growth_rate)?;
        let market_scale_contribution = inputs.market_size * BILLION * growth_factor;
        let extractive_power = inputs.market_share * inputs.margin;
        let total_value = market_scale_contribution * inputs.market_share * inputs.margin;

        Ok(ScaleValue {
            growth_factor,
            market_scale_contribution,
            extractive_power,
            total_value,
        })
    }
}
