//! Fuzz Call Metrics CLI
//!
//! Plots per-call run counts and zero-result ratios from a fuzz harness
//! call metrics log.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use fuzz_call_metrics::chart::BarChartConfig;
use fuzz_call_metrics::commands::{execute_plot, validate_args, PlotArgs};
use fuzz_call_metrics::utils::config::{DEFAULT_BAR_WIDTH, DEFAULT_METRICS_FILE};

/// Plot fuzz test call metrics as terminal bar charts
#[derive(Parser, Debug)]
#[command(name = "plot-metrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the call metrics log
    #[arg(default_value = DEFAULT_METRICS_FILE)]
    file: PathBuf,

    /// Length of the longest bar, in characters
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    width: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = PlotArgs {
        input: cli.file,
        chart_config: BarChartConfig::new().with_width(cli.width),
    };

    // Validate args first
    validate_args(&args)?;

    execute_plot(args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_defaults_to_call_metrics() {
        let cli = Cli::try_parse_from(["plot-metrics"]).unwrap();
        assert_eq!(cli.file, PathBuf::from(DEFAULT_METRICS_FILE));
        assert_eq!(cli.width, DEFAULT_BAR_WIDTH);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_hyphen_path_after_separator() {
        let cli = Cli::try_parse_from(["plot-metrics", "--", "-v"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("-v"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["plot-metrics", "a.txt", "b.txt"]).is_err());
    }
}
