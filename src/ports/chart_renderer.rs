//! Chart Renderer Port - Hands curves to an external plotting tool.
//!
//! The domain produces curves; how they are drawn is somebody else's job.
//! Adapters (like `CsvChartRenderer`) turn a `Chart` into text a plotting
//! tool can consume.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Curve;

/// Port for rendering a chart description.
///
/// # Contract
///
/// Implementations must:
/// - Emit every point of every series, in curve order
/// - Carry the axis scale through so log-x charts display as such
/// - Reject charts with no data via `ChartError::Empty`
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ChartRenderer = get_renderer();
/// let text = renderer.render(&chart)?;
/// ```
pub trait ChartRenderer: Send + Sync {
    /// Render the chart to its textual representation.
    fn render(&self, chart: &Chart) -> Result<String, ChartError>;

    /// The output format this renderer produces.
    fn format(&self) -> ChartFormat;
}

/// Scale used for the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

/// A named curve within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Curve,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Curve) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Everything a line plot needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: AxisScale,
    pub series: Vec<Series>,
}

impl Chart {
    /// Creates an empty linear-scale chart.
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_scale: AxisScale::Linear,
            series: Vec::new(),
        }
    }

    /// Sets the x axis scale.
    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = scale;
        self
    }

    /// Adds a series.
    pub fn with_series(mut self, name: impl Into<String>, points: Curve) -> Self {
        self.series.push(Series::new(name, points));
        self
    }

    /// Checks that there is something to draw.
    pub fn ensure_not_empty(&self) -> Result<(), ChartError> {
        if self.series.is_empty() {
            return Err(ChartError::Empty(self.title.clone()));
        }
        if let Some(series) = self.series.iter().find(|s| s.points.is_empty()) {
            return Err(ChartError::EmptySeries(series.name.clone()));
        }
        Ok(())
    }
}

/// Chart output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartFormat {
    #[default]
    Csv,
    Json,
}

impl ChartFormat {
    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Csv => "csv",
            ChartFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ChartFormat {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ChartFormat::Csv),
            "json" => Ok(ChartFormat::Json),
            _ => Err(ChartError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart '{0}' has no series")]
    Empty(String),

    #[error("Series '{0}' has no points")]
    EmptySeries(String),

    #[error("Unsupported chart format: {0}")]
    UnsupportedFormat(String),

    #[error("Series '{0}' cannot be drawn on a log-scaled x axis")]
    InvalidLogAxis(String),

    #[error("Chart serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
