use crate::chart::BarChartConfig;
use crate::utils::config::DEFAULT_METRICS_FILE;
use std::path::PathBuf;

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Path to the call metrics log
    pub input: PathBuf,

    /// Bar chart configuration
    pub chart_config: BarChartConfig,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_METRICS_FILE),
            chart_config: BarChartConfig::default(),
        }
    }
}
