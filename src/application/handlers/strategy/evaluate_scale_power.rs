//! EvaluateScalePowerHandler - Computes and formats the value accretion metrics.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::strategy::{
    format_abbreviated, format_percent, ScaleInputs, ScalePowerModel, ScaleValue,
};

pub const MARKET_SCALE_LABEL: &str = "Contribution to market scale growth over inf";
pub const EXTRACTIVE_POWER_LABEL: &str = "Long-term market extractive power";
pub const TOTAL_VALUE_LABEL: &str = "Long-term value accretion potential";

/// Command to evaluate the scale-power model.
#[derive(Debug, Clone)]
pub struct EvaluateScalePowerCommand {
    pub inputs: ScaleInputs,
}

/// A labelled metric ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricView {
    pub label: &'static str,
    pub display: String,
    pub raw: f64,
}

impl MetricView {
    fn new(label: &'static str, display: String, raw: f64) -> Self {
        Self { label, display, raw }
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateScalePowerResult {
    pub value: ScaleValue,
    pub metrics: Vec<MetricView>,
}

impl EvaluateScalePowerResult {
    /// Looks up a metric by label.
    pub fn metric(&self, label: &str) -> Option<&MetricView> {
        self.metrics.iter().find(|m| m.label == label)
    }
}

/// Handler for scale-power evaluations.
#[derive(Debug, Clone, Default)]
pub struct EvaluateScalePowerHandler;

impl EvaluateScalePowerHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: EvaluateScalePowerCommand,
    ) -> Result<EvaluateScalePowerResult, DomainError> {
        // 1. Compute
        let value = ScalePowerModel::compute(&cmd.inputs)?;

        debug!(
            growth_factor = value.growth_factor,
            total_value = value.total_value,
            "Computed scale-power value"
        );

        // 2. Format for display
        let metrics = vec![
            MetricView::new(
                MARKET_SCALE_LABEL,
                format_abbreviated(value.market_scale_contribution)?,
                value.market_scale_contribution,
            ),
            MetricView::new(
                EXTRACTIVE_POWER_LABEL,
                format_percent(value.extractive_power),
                value.extractive_power,
            ),
            MetricView::new(
                TOTAL_VALUE_LABEL,
                format_abbreviated(value.total_value)?,
                value.total_value,
            ),
        ];

        Ok(EvaluateScalePowerResult { value, metrics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn default_dials_produce_dashboard_metrics() {
        let result = EvaluateScalePowerHandler::new()
            .handle(EvaluateScalePowerCommand {
                inputs: ScaleInputs::default(),
            })
            .unwrap();

        assert_eq!(result.metrics.len(), 3);
        assert_eq!(result.metric(MARKET_SCALE_LABEL).unwrap().display, "2.8tn");
        assert_eq!(result.metric(EXTRACTIVE_POWER_LABEL).unwrap().display, "3.0%");
        assert_eq!(result.metric(TOTAL_VALUE_LABEL).unwrap().display, "84bn");
    }

    #[test]
    fn growth_at_cost_of_capital_propagates_domain_error() {
        let inputs = ScaleInputs {
            growth_rate: 0.2,
            cost_of_capital: 0.2,
            ..ScaleInputs::default()
        };
        let err = EvaluateScalePowerHandler::new()
            .handle(EvaluateScalePowerCommand { inputs })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UndefinedGrowthFactor);
    }

    #[test]
    fn values_beyond_trillions_fail_formatting() {
        // Near-equal growth makes g enormous; the formatter refuses to guess.
        let inputs = ScaleInputs {
            cost_of_capital: 0.10,
            growth_rate: 0.10 - 1e-9,
            ..ScaleInputs::default()
        };
        let err = EvaluateScalePowerHandler::new()
            .handle(EvaluateScalePowerCommand { inputs })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MagnitudeOutOfRange);
    }

    #[test]
    fn result_serializes_metrics() {
        let result = EvaluateScalePowerHandler::new()
            .handle(EvaluateScalePowerCommand {
                inputs: ScaleInputs::default(),
            })
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(TOTAL_VALUE_LABEL));
        assert!(json.contains("\"display\":\"84bn\""));
    }
}
