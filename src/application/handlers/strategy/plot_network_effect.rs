//! PlotNetworkEffectHandler - Computes and renders the network effect curve.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::Curve;
use crate::domain::strategy::{NetworkEffectModel, NetworkInputs};
use crate::ports::{AxisScale, Chart, ChartRenderer};

use super::DialError;

pub const NETWORK_CHART_TITLE: &str = "Surplus leader margin vs. network differential";
pub const NETWORK_X_LABEL: &str = "User differential (leader - underdog)";
pub const NETWORK_Y_LABEL: &str = "Surplus leader margin";

/// Command to plot the network effect curve.
#[derive(Debug, Clone)]
pub struct PlotNetworkEffectCommand {
    pub inputs: NetworkInputs,
    /// Draw the differential on a log-scaled axis.
    pub log_x: bool,
}

/// Result of a successful plot.
#[derive(Debug, Clone)]
pub struct PlotNetworkEffectResult {
    pub curve: Curve,
    pub rendered: String,
}

/// Handler for network effect plots.
pub struct PlotNetworkEffectHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl PlotNetworkEffectHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(
        &self,
        cmd: PlotNetworkEffectCommand,
    ) -> Result<PlotNetworkEffectResult, DialError> {
        // 1. Compute
        let curve = NetworkEffectModel::compute_curve(&cmd.inputs)?;

        // 2. Check the log axis up front so the caller gets a domain error
        let x_scale = if cmd.log_x {
            if let Err(e) = curve.to_log_x() {
                warn!(error = %e, "Network curve cannot be drawn on a log axis");
                return Err(e.into());
            }
            AxisScale::Log
        } else {
            AxisScale::Linear
        };

        debug!(
            points = curve.len(),
            log_x = cmd.log_x,
            max_margin = curve.last().map(|p| p.y).unwrap_or_default(),
            "Computed network effect curve"
        );

        // 3. Render
        let chart = Chart::new(NETWORK_CHART_TITLE, NETWORK_X_LABEL, NETWORK_Y_LABEL)
            .with_x_scale(x_scale)
            .with_series("surplus_leader_margin", curve.clone());
        let rendered = self.renderer.render(&chart)?;

        Ok(PlotNetworkEffectResult { curve, rendered })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::{ChartError, ChartFormat};
    use std::sync::Mutex;

    struct MockChartRenderer {
        charts: Mutex<Vec<Chart>>,
    }

    impl MockChartRenderer {
        fn new() -> Self {
            Self {
                charts: Mutex::new(Vec::new()),
            }
        }

        fn rendered_charts(&self) -> Vec<Chart> {
            self.charts.lock().unwrap().clone()
        }
    }

    impl ChartRenderer for MockChartRenderer {
        fn render(&self, chart: &Chart) -> Result<String, ChartError> {
            self.charts.lock().unwrap().push(chart.clone());
            Ok(format!("{} points", chart.series[0].points.len()))
        }

        fn format(&self) -> ChartFormat {
            ChartFormat::Csv
        }
    }

    #[test]
    fn plots_curve_through_renderer() {
        let renderer = Arc::new(MockChartRenderer::new());
        let handler = PlotNetworkEffectHandler::new(renderer.clone());

        let result = handler
            .handle(PlotNetworkEffectCommand {
                inputs: NetworkInputs::default(),
                log_x: false,
            })
            .unwrap();

        assert_eq!(result.rendered, "1000 points");
        let charts = renderer.rendered_charts();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].x_scale, AxisScale::Linear);
        assert_eq!(charts[0].series[0].points, result.curve);
    }

    #[test]
    fn log_x_sets_axis_scale() {
        let renderer = Arc::new(MockChartRenderer::new());
        let handler = PlotNetworkEffectHandler::new(renderer.clone());

        handler
            .handle(PlotNetworkEffectCommand {
                inputs: NetworkInputs::default(),
                log_x: true,
            })
            .unwrap();

        assert_eq!(renderer.rendered_charts()[0].x_scale, AxisScale::Log);
    }

    #[test]
    fn log_x_with_zero_differential_fails_before_rendering() {
        let renderer = Arc::new(MockChartRenderer::new());
        let handler = PlotNetworkEffectHandler::new(renderer.clone());

        let err = handler
            .handle(PlotNetworkEffectCommand {
                inputs: NetworkInputs {
                    underdog_users: 0.0,
                    ..NetworkInputs::default()
                },
                log_x: true,
            })
            .unwrap_err();

        assert_eq!(
            err.as_domain().map(|e| e.code),
            Some(ErrorCode::NonPositiveLogAxis)
        );
        assert!(renderer.rendered_charts().is_empty());
    }

    #[test]
    fn invalid_inputs_do_not_render() {
        let renderer = Arc::new(MockChartRenderer::new());
        let handler = PlotNetworkEffectHandler::new(renderer.clone());

        let result = handler.handle(PlotNetworkEffectCommand {
            inputs: NetworkInputs {
                delta: 0.0,
                ..NetworkInputs::default()
            },
            log_x: false,
        });

        assert!(matches!(result, Err(DialError::Domain(_))));
        assert!(renderer.rendered_charts().is_empty());
    }
}
