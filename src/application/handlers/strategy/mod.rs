//! Strategy dial handlers.
//!
//! Each handler takes the current dial values, runs one formula model and
//! prepares the result for display: formatted metrics for the scale-power
//! model, rendered charts for the curve models.

mod error;
mod evaluate_scale_power;
mod plot_branding;
mod plot_network_effect;

pub use error::DialError;
pub use evaluate_scale_power::{
    EvaluateScalePowerCommand, EvaluateScalePowerHandler, EvaluateScalePowerResult, MetricView,
    EXTRACTIVE_POWER_LABEL, MARKET_SCALE_LABEL, TOTAL_VALUE_LABEL,
};
pub use plot_branding::{
    PlotBrandingCommand, PlotBrandingHandler, PlotBrandingResult, BRANDING_CHART_TITLE,
};
pub use plot_network_effect::{
    PlotNetworkEffectCommand, PlotNetworkEffectHandler, PlotNetworkEffectResult,
    NETWORK_CHART_TITLE, NETWORK_X_LABEL, NETWORK_Y_LABEL,
};
