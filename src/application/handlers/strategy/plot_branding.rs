//! PlotBrandingHandler - Computes and renders the branding curves.

use std::sync::Arc;

use tracing::debug;

use crate::domain::strategy::{BrandInputs, BrandingCurves, BrandingModel};
use crate::ports::{Chart, ChartRenderer};

use super::DialError;

pub const BRANDING_CHART_TITLE: &str = "Branding multiplier over time";

/// Command to plot the branding curves.
#[derive(Debug, Clone)]
pub struct PlotBrandingCommand {
    pub inputs: BrandInputs,
}

/// Result of a successful plot.
#[derive(Debug, Clone)]
pub struct PlotBrandingResult {
    pub curves: BrandingCurves,
    pub rendered: String,
}

/// Handler for branding plots.
pub struct PlotBrandingHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl PlotBrandingHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(&self, cmd: PlotBrandingCommand) -> Result<PlotBrandingResult, DialError> {
        let curves = BrandingModel::compute_curves(&cmd.inputs)?;

        debug!(
            asymptote = cmd.inputs.asymptote(),
            final_multiplier = curves.multiplier_curve.last().map(|p| p.y).unwrap_or_default(),
            "Computed branding curves"
        );

        let chart = Chart::new(BRANDING_CHART_TITLE, "Time", "Multiplier / margin")
            .with_series("branding_multiplier", curves.multiplier_curve.clone())
            .with_series("surplus_leader_margin", curves.slm_curve.clone());
        let rendered = self.renderer.render(&chart)?;

        Ok(PlotBrandingResult { curves, rendered })
    }
}
