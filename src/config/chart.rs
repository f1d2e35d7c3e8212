//! Chart output configuration

use serde::Deserialize;

use crate::ports::ChartFormat;

/// Chart output options
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChartConfig {
    /// Output format for rendered curves
    #[serde(default)]
    pub format: ChartFormat,

    /// Indent JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Draw the network differential on a log-scaled axis
    #[serde(default)]
    pub network_log_x: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.format, ChartFormat::Csv);
        assert!(!config.pretty);
        assert!(!config.network_log_x);
    }

    #[test]
    fn test_chart_config_deserialization() {
        let json = r#"{ "format": "json", "pretty": true, "network_log_x": true }"#;
        let config: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.format, ChartFormat::Json);
        assert!(config.pretty);
        assert!(config.network_log_x);
    }
}
