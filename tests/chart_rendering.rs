//! Integration tests for the dial handlers wired to real chart adapters.
//!
//! These tests verify the path a caller takes from dial values to output:
//! 1. Scale-power metrics are formatted with dashboard labels
//! 2. Network and branding curves render as CSV and JSON
//! 3. Domain failures surface as typed errors with nothing rendered

use std::sync::Arc;

use strategy_dials::adapters::{renderer_for, CsvChartRenderer, JsonChartRenderer};
use strategy_dials::application::handlers::strategy::{
    EXTRACTIVE_POWER_LABEL, MARKET_SCALE_LABEL, NETWORK_CHART_TITLE, TOTAL_VALUE_LABEL,
};
use strategy_dials::application::{
    DialError, EvaluateScalePowerCommand, EvaluateScalePowerHandler, PlotBrandingCommand,
    PlotBrandingHandler, PlotNetworkEffectCommand, PlotNetworkEffectHandler,
};
use strategy_dials::domain::foundation::{Curve, ErrorCode};
use strategy_dials::domain::strategy::{BrandInputs, NetworkInputs, ScaleInputs};
use strategy_dials::ports::{AxisScale, Chart, ChartFormat};

/// JSON floats may differ from the source by an ulp after parsing.
fn assert_close(parsed: &Curve, expected: &Curve) {
    assert_eq!(parsed.len(), expected.len());
    for (a, b) in parsed.points().iter().zip(expected.points()) {
        assert!((a.x - b.x).abs() <= b.x.abs() * 1e-12);
        assert!((a.y - b.y).abs() <= b.y.abs() * 1e-12);
    }
}

// =============================================================================
// Scale-Power
// =============================================================================

#[test]
fn scale_power_metrics_use_dashboard_labels() {
    let result = EvaluateScalePowerHandler::new()
        .handle(EvaluateScalePowerCommand {
            inputs: ScaleInputs::default(),
        })
        .unwrap();

    let labels: Vec<&str> = result.metrics.iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        vec![MARKET_SCALE_LABEL, EXTRACTIVE_POWER_LABEL, TOTAL_VALUE_LABEL]
    );
    assert_eq!(result.metrics[2].display, "84bn");
}

// =============================================================================
// Network Effect
// =============================================================================

#[test]
fn network_curve_renders_as_csv() {
    let handler = PlotNetworkEffectHandler::new(Arc::new(CsvChartRenderer::new()));
    let inputs = NetworkInputs {
        resolution: 10,
        ..NetworkInputs::default()
    };

    let result = handler
        .handle(PlotNetworkEffectCommand {
            inputs,
            log_x: false,
        })
        .unwrap();

    let lines: Vec<&str> = result.rendered.lines().collect();
    assert_eq!(lines[0], "series,x,y");
    assert_eq!(lines.len(), 11);
    assert!(lines[1..]
        .iter()
        .all(|l| l.starts_with("surplus_leader_margin,")));
}

#[test]
fn network_curve_renders_as_log_scaled_json() {
    let handler = PlotNetworkEffectHandler::new(Arc::new(JsonChartRenderer::new()));

    let result = handler
        .handle(PlotNetworkEffectCommand {
            inputs: NetworkInputs::default(),
            log_x: true,
        })
        .unwrap();

    let chart: Chart = serde_json::from_str(&result.rendered).unwrap();
    assert_eq!(chart.title, NETWORK_CHART_TITLE);
    assert_eq!(chart.x_scale, AxisScale::Log);
    assert_close(&chart.series[0].points, &result.curve);
}

#[test]
fn network_domain_error_is_typed() {
    let handler = PlotNetworkEffectHandler::new(renderer_for(ChartFormat::Csv, false));

    let err = handler
        .handle(PlotNetworkEffectCommand {
            inputs: NetworkInputs {
                variable_cost: -1.0,
                ..NetworkInputs::default()
            },
            log_x: false,
        })
        .unwrap_err();

    match err {
        DialError::Domain(e) => assert_eq!(e.code, ErrorCode::ValidationFailed),
        other => panic!("Expected domain error, got {:?}", other),
    }
}

// =============================================================================
// Branding
// =============================================================================

#[test]
fn branding_renders_two_series_as_json() {
    let handler = PlotBrandingHandler::new(renderer_for(ChartFormat::Json, true));

    let result = handler
        .handle(PlotBrandingCommand {
            inputs: BrandInputs::default(),
        })
        .unwrap();

    let chart: Chart = serde_json::from_str(&result.rendered).unwrap();
    assert_eq!(chart.series.len(), 2);
    assert_close(&chart.series[0].points, &result.curves.multiplier_curve);
    assert_close(&chart.series[1].points, &result.curves.slm_curve);
}

#[test]
fn branding_zero_dilution_fails_without_partial_output() {
    let handler = PlotBrandingHandler::new(renderer_for(ChartFormat::Csv, false));

    let result = handler.handle(PlotBrandingCommand {
        inputs: BrandInputs {
            dilution: 0.0,
            ..BrandInputs::default()
        },
    });

    let err = result.unwrap_err();
    assert_eq!(err.as_domain().map(|e| e.code), Some(ErrorCode::ZeroDenominator));
}
