//! Input readers for the metrics log.

pub mod file;

pub use file::read_metrics;
