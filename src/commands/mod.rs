//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod plot;

// Re-export main command functions
pub use models::PlotArgs;
pub use plot::{execute_plot, render_report, validate_args};
