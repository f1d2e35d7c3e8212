//! JSON chart renderer adapter.

use crate::ports::{Chart, ChartError, ChartFormat, ChartRenderer};

/// JSON implementation of ChartRenderer.
///
/// Serializes the whole `Chart`, including title, axis labels and axis
/// scale, so a plotting front end can draw it without extra metadata.
#[derive(Debug, Clone, Default)]
pub struct JsonChartRenderer {
    pretty: bool,
}

impl JsonChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ChartRenderer for JsonChartRenderer {
    fn render(&self, chart: &Chart) -> Result<String, ChartError> {
        chart.ensure_not_empty()?;

        let json = if self.pretty {
            serde_json::to_string_pretty(chart)?
        } else {
            serde_json::to_string(chart)?
        };
        Ok(json)
    }

    fn format(&self) -> ChartFormat {
        ChartFormat::Json
    }
}
