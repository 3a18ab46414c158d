//! Plot command implementation.
//!
//! The plot command:
//! 1. Reads the metrics log
//! 2. Aggregates calls per kind
//! 3. Renders the global distribution chart
//! 4. Renders one zero/nonzero chart per kind

use super::models::PlotArgs;
use crate::aggregator::{derive_global_chart, derive_kind_charts, AggregateState, Chart};
use crate::chart::{render_bar_chart, BarChartConfig};
use crate::input::read_metrics;
use crate::parser::parse;
use crate::utils::config::{DIVIDER_WIDTH, MAX_BAR_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Metrics file missing or unreadable. Nothing is printed in that case.
pub fn execute_plot(args: PlotArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Plotting call metrics from: {}", args.input.display());

    let raw = read_metrics(&args.input).context("Failed to read call metrics")?;

    let state = parse(&raw);
    info!("Aggregated calls: {}", state.summary());

    println!("{}", render_report(&state, &args.chart_config));

    debug!("Plot completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Render the full text report
///
/// **Public** - used by execute_plot, exposed for tests
///
/// The report is the run total header, the global chart, then a divider
/// and a split chart for every kind in first-seen order.
pub fn render_report(state: &AggregateState, config: &BarChartConfig) -> String {
    let mut lines = Vec::new();

    let global = derive_global_chart(state);
    lines.push(format!("Fuzz test metrics ({} runs):", global.basis));
    lines.push(String::new());
    lines.push(render_chart(&global, config));

    for (kind, chart) in derive_kind_charts(state) {
        debug!("Rendering split chart for {}", kind);
        lines.push("-".repeat(DIVIDER_WIDTH));
        lines.push(render_chart(&chart, config));
    }

    lines.join("\n")
}

/// Render one chart dataset with its percentage labels
///
/// **Private** - internal helper
fn render_chart(chart: &Chart, config: &BarChartConfig) -> String {
    render_bar_chart(&chart.items(), |index| chart.label_at(index), config)
}

/// Validate plot arguments
///
/// **Public** - can be called before execute_plot for early validation
pub fn validate_args(args: &PlotArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.chart_config.width == 0 {
        anyhow::bail!("Bar width must be greater than 0");
    }

    if args.chart_config.width > MAX_BAR_WIDTH {
        anyhow::bail!("Bar width is too large (max {})", MAX_BAR_WIDTH);
    }

    Ok(())
}
