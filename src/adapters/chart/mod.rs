//! Chart rendering adapters.

mod csv_renderer;
mod json_renderer;

use std::sync::Arc;

use crate::ports::{ChartFormat, ChartRenderer};

pub use csv_renderer::CsvChartRenderer;
pub use json_renderer::JsonChartRenderer;

/// Returns the renderer for an output format.
pub fn renderer_for(format: ChartFormat, pretty: bool) -> Arc<dyn ChartRenderer> {
    match format {
        ChartFormat::Csv => Arc::new(CsvChartRenderer::new()),
        ChartFormat::Json if pretty => Arc::new(JsonChartRenderer::pretty()),
        ChartFormat::Json => Arc::new(JsonChartRenderer::new()),
    }
}
