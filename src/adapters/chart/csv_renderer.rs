//! CSV chart renderer adapter.
//!
//! Emits one row per point with the series name in the first column, so a
//! multi-series chart stays a single flat table.

use std::fmt::Write as _;

use crate::ports::{AxisScale, Chart, ChartError, ChartFormat, ChartRenderer};

/// CSV implementation of ChartRenderer.
///
/// Columns are `series,x,y`. Log-scaled charts get an extra `log10_x`
/// column so the raw differential is still available.
#[derive(Debug, Clone, Default)]
pub struct CsvChartRenderer;

impl CsvChartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn escape(field: &str) -> String {
        if field.contains([',', '"', '\n']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl ChartRenderer for CsvChartRenderer {
    fn render(&self, chart: &Chart) -> Result<String, ChartError> {
        chart.ensure_not_empty()?;

        let mut out = String::new();
        match chart.x_scale {
            AxisScale::Linear => out.push_str("series,x,y\n"),
            AxisScale::Log => out.push_str("series,x,y,log10_x\n"),
        }

        for series in &chart.series {
            let name = Self::escape(&series.name);
            match chart.x_scale {
                AxisScale::Linear => {
                    for p in series.points.points() {
                        // Writing to a String cannot fail.
                        let _ = writeln!(out, "{},{},{}", name, p.x, p.y);
                    }
                }
                AxisScale::Log => {
                    let log = series
                        .points
                        .to_log_x()
                        .map_err(|_| ChartError::InvalidLogAxis(series.name.clone()))?;
                    for (p, l) in series.points.points().iter().zip(log.points()) {
                        let _ = writeln!(out, "{},{},{},{}", name, p.x, p.y, l.x);
                    }
                }
            }
        }

        Ok(out)
    }

    fn format(&self) -> ChartFormat {
        ChartFormat::Csv
    }
}
