//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChartRenderer` - Turns computed curves into plottable output

mod chart_renderer;

pub use chart_renderer::{AxisScale, Chart, ChartError, ChartFormat, ChartRenderer, Series};
