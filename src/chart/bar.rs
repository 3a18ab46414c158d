//! Horizontal text bar charts for terminal output.
//!
//! Each row is `<label> <bar> <display label>`. Labels are left-aligned to
//! the widest one, bars are scaled so the largest value fills the width.

use crate::utils::config::{DEFAULT_BAR_CHAR, DEFAULT_BAR_WIDTH};

/// Bar chart configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartConfig {
    /// Number of characters of the longest bar
    pub width: usize,

    /// Character the bars are drawn with
    pub bar_char: char,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BAR_WIDTH,
            bar_char: DEFAULT_BAR_CHAR,
        }
    }
}

impl BarChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_bar_char(mut self, bar_char: char) -> Self {
        self.bar_char = bar_char;
        self
    }
}

/// Render a bar chart
///
/// **Public** - main entry point for chart rendering
///
/// # Arguments
/// * `items` - Ordered `(label, value)` pairs, one row each
/// * `render_label` - Maps a row index to the text printed after the bar
/// * `config` - Bar width and character
///
/// # Returns
/// Multi-line chart without a trailing newline. Empty input renders as an
/// empty string.
pub fn render_bar_chart<F>(
    items: &[(&str, u64)],
    render_label: F,
    config: &BarChartConfig,
) -> String
where
    F: Fn(usize) -> String,
{
    let label_width = items
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = items.iter().map(|(_, value)| *value).max().unwrap_or(0);

    items
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let bar = config
                .bar_char
                .to_string()
                .repeat(bar_length(*value, max_value, config.width));

            format!(
                "{:<label_width$} {:<bar_width$} {}",
                label,
                bar,
                render_label(index),
                label_width = label_width,
                bar_width = config.width,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scale `value` to a bar length, the largest value filling `width`
///
/// **Private** - internal helper
fn bar_length(value: u64, max_value: u64, width: usize) -> usize {
    if max_value == 0 {
        return 0;
    }

    ((value as f64 / max_value as f64) * width as f64).round() as usize
}
