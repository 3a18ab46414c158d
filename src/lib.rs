//! Fuzz Call Metrics
//!
//! Aggregates the call metrics log written by a fuzz-testing harness and
//! plots it as text bar charts: the distribution of runs across calls, and
//! for each call the share of runs that hit its zero case.
//!
//! This crate provides the core implementation for the
//! `plot-metrics` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! plot-metrics                  # reads ./call-metrics.txt
//! plot-metrics path/to/log.txt --width 30
//! ```
//!
//! Library use:
//!
//! ```
//! use fuzz_call_metrics::aggregator::derive_global_chart;
//! use fuzz_call_metrics::parser::parse;
//!
//! let state = parse("foo:1|x\nfoo:1|x\nbar:1|x\n");
//! let chart = derive_global_chart(&state);
//! assert_eq!(chart.entries[0].display_label(), "1 (33.33%)");
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod input;
pub mod parser;
pub mod utils;
