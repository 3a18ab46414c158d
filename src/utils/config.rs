//! Configuration and constants for the CLI.

/// Log file read when no path is given on the command line
pub const DEFAULT_METRICS_FILE: &str = "call-metrics.txt";

// Field separators of a metrics line: `<call>:<ignored>|<ignored>`
pub const METRIC_SEPARATOR: char = '|';
pub const CALL_SEPARATOR: char = ':';

/// Suffix marking the degenerate ("zero") outcome of a call
pub const ZERO_SUFFIX: &str = ".zero";

// Bar chart rendering
pub const DEFAULT_BAR_WIDTH: usize = 50;
pub const MAX_BAR_WIDTH: usize = 200;
pub const DEFAULT_BAR_CHAR: char = '█';

/// Width of the dashed line printed between per-kind charts
pub const DIVIDER_WIDTH: usize = 40;
