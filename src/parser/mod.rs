//! Metrics log parsing and record definitions.
//!
//! This module handles:
//! - Splitting the raw log into lines
//! - Extracting the call identifier of each line
//! - Detecting the `.zero` variant of a call

pub mod metrics_log;
pub mod schema;

// Re-export main types
pub use metrics_log::{parse, parse_line};
pub use schema::MetricRecord;
