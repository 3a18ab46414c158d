//! Aggregation of parsed call records into chart datasets.
//!
//! This module transforms parsed metrics into:
//! - Per-kind totals and zero counts (AggregateState)
//! - The global call distribution chart
//! - Per-kind zero/nonzero split charts

pub mod charts;
pub mod state;

// Re-export main types and functions
pub use charts::{
    derive_global_chart, derive_kind_chart, derive_kind_charts, Chart, ChartEntry,
};
pub use state::AggregateState;
