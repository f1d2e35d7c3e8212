//! Network Effect Model - Surplus leader margin over user differentials.
//!
//! The underdog holds a share of a two-platform market. Sweeping that share
//! gives the implied leader user count, the user differential between the
//! two platforms, and the margin surplus the leader can sustain:
//!
//! slm = 1 - 1 / ((delta / variable_cost) * diff + 1)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Curve, CurvePoint, DomainError, ErrorCode, ValidationError};

/// Default number of share samples in the sweep.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Largest number of share samples a single sweep may request.
pub const MAX_RESOLUTION: usize = 100_000;

/// Largest share the underdog can hold and still be the underdog.
pub const MAX_UNDERDOG_SHARE: f64 = 0.5;

/// Dial values for the network effect model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInputs {
    /// Variable cost per unit served.
    pub variable_cost: f64,
    /// Marginal value each additional user adds.
    pub delta: f64,
    /// Lower bound of the underdog share sweep.
    pub low_share: f64,
    /// Upper bound (exclusive) of the underdog share sweep.
    pub high_share: f64,
    /// Users on the underdog platform.
    pub underdog_users: f64,
    /// Number of samples in the share sweep.
    pub resolution: usize,
}

impl NetworkInputs {
    /// Checks every dial against its allowed range.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("variable_cost", self.variable_cost),
            ("delta", self.delta),
            ("low_share", self.low_share),
            ("high_share", self.high_share),
            ("underdog_users", self.underdog_users),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::not_finite(field, value).into());
            }
        }

        if self.variable_cost <= 0.0 {
            return Err(DomainError::validation(
                "variable_cost",
                "Variable cost must be greater than zero",
            ));
        }
        if self.delta <= 0.0 {
            return Err(DomainError::validation(
                "delta",
                "Marginal per-user value must be greater than zero",
            ));
        }
        if self.low_share <= 0.0 || self.low_share > MAX_UNDERDOG_SHARE {
            return Err(ValidationError::out_of_range(
                "low_share",
                0.0,
                MAX_UNDERDOG_SHARE,
                self.low_share,
            )
            .into());
        }
        if self.high_share < self.low_share || self.high_share > MAX_UNDERDOG_SHARE {
            return Err(ValidationError::out_of_range(
                "high_share",
                self.low_share,
                MAX_UNDERDOG_SHARE,
                self.high_share,
            )
            .into());
        }
        if self.underdog_users < 0.0 {
            return Err(ValidationError::out_of_range(
                "underdog_users",
                0.0,
                f64::INFINITY,
                self.underdog_users,
            )
            .into());
        }
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(ValidationError::out_of_range(
                "resolution",
                1.0,
                MAX_RESOLUTION as f64,
                self.resolution as f64,
            )
            .into());
        }
        Ok(())
    }

    /// Value of one extra user relative to the cost of serving it.
    pub fn value_cost_ratio(&self) -> f64 {
        self.delta / self.variable_cost
    }
}

impl Default for NetworkInputs {
    fn default() -> Self {
        Self {
            variable_cost: 1.0,
            delta: 0.0001,
            low_share: 0.01,
            high_share: 0.5,
            underdog_users: 10_000.0,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Network effect functions.
pub struct NetworkEffectModel;

impl NetworkEffectModel {
    /// Evenly spaced shares in `[low, high)`, endpoint excluded.
    pub fn sample_shares(low: f64, high: f64, resolution: usize) -> Vec<f64> {
        let step = (high - low) / resolution as f64;
        (0..resolution).map(|i| low + i as f64 * step).collect()
    }

    /// User differential implied by the underdog holding `share` of the market.
    pub fn user_differential(underdog_users: f64, share: f64) -> f64 {
        let leader_users = underdog_users / share - underdog_users;
        leader_users - underdog_users
    }

    /// Surplus leader margin for a given user differential.
    ///
    /// # Edge Cases
    /// - diff = 0: Returns 0 (no differential, no surplus)
    /// - ratio * diff + 1 == 0: Fails with `ZeroDenominator`
    pub fn surplus_leader_margin(value_cost_ratio: f64, diff: f64) -> Result<f64, DomainError> {
        let denominator = value_cost_ratio * diff + 1.0;
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(DomainError::new(
                ErrorCode::ZeroDenominator,
                "Surplus leader margin is undefined for this user differential",
            )
            .with_detail("diff", diff.to_string()));
        }
        Ok(1.0 - 1.0 / denominator)
    }

    /// Computes the (diff, slm) curve, sorted by ascending diff.
    ///
    /// Any undefined point fails the whole curve.
    pub fn compute_curve(inputs: &NetworkInputs) -> Result<Curve, DomainError> {
        inputs.validate()?;

        let ratio = inputs.value_cost_ratio();
        let mut curve = Self::sample_shares(inputs.low_share, inputs.high_share, inputs.resolution)
            .into_iter()
            .map(|share| {
                let diff = Self::user_differential(inputs.underdog_users, share);
                Self::surplus_leader_margin(ratio, diff)
                    .map(|slm| CurvePoint::new(diff, slm))
                    .map_err(|e| e.with_detail("share", share.to_string()))
            })
            .collect::<Result<Curve, DomainError>>()?;

        // Differential shrinks as the underdog's share grows.
        curve.sort_by_x();
        Ok(curve)
    }
}
