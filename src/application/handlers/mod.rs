//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod strategy;

pub use strategy::{
    // Errors
    DialError,
    // Scale-power
    EvaluateScalePowerCommand, EvaluateScalePowerHandler, EvaluateScalePowerResult, MetricView,
    // Network effect
    PlotNetworkEffectCommand, PlotNetworkEffectHandler, PlotNetworkEffectResult,
    // Branding
    PlotBrandingCommand, PlotBrandingHandler, PlotBrandingResult,
};
