//! Parser for the plain-text call metrics log written by the fuzz harness.
//!
//! Each non-blank line looks like `<call>[:<ignored>][|<ignored>]`.
//! Only the call identifier is kept; everything after the first `:` or
//! `|` is discarded. Malformed lines are never rejected, they degrade to
//! whatever the best-effort split leaves as the call identifier.

use super::schema::MetricRecord;
use crate::aggregator::AggregateState;
use crate::utils::config::{CALL_SEPARATOR, METRIC_SEPARATOR};
use log::debug;

/// Parse the full text of a metrics log
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw_text` - Entire content of the log file
///
/// # Returns
/// Aggregated per-kind totals and zero counts. Lines are folded in file
/// order, so kinds keep their first-seen order.
pub fn parse(raw_text: &str) -> AggregateState {
    let mut state = AggregateState::new();
    let mut blank_lines = 0usize;

    for line in raw_text.split('\n') {
        match parse_line(line) {
            Some(record) => state.record(&record),
            None => blank_lines += 1,
        }
    }

    debug!(
        "Parsed {} records ({} blank lines skipped)",
        state.total_runs(),
        blank_lines
    );

    state
}

/// Parse a single log line
///
/// **Public** - exposed for tests and callers that stream lines
///
/// # Returns
/// `None` for blank or whitespace-only lines, otherwise the record
pub fn parse_line(line: &str) -> Option<MetricRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    Some(MetricRecord::from_call(extract_call(line)))
}

/// Cut the call identifier out of a trimmed line
///
/// **Private** - internal helper for parse_line
fn extract_call(line: &str) -> &str {
    let metric = line.split(METRIC_SEPARATOR).next().unwrap_or(line);
    metric.split(CALL_SEPARATOR).next().unwrap_or(metric)
}
