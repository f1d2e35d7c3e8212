//! Adapters - Implementations of port interfaces.
//!
//! - `chart` - CSV and JSON chart renderers

pub mod chart;

pub use chart::{renderer_for, CsvChartRenderer, JsonChartRenderer};
