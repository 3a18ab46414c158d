//! Text chart rendering.

pub mod bar;

pub use bar::{render_bar_chart, BarChartConfig};
