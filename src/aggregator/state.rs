//! Per-kind occurrence tallies built from one pass over the metrics log.
//!
//! Totals include the zero variant: a `foo.zero` line and a `foo` line both
//! increment `foo`'s total, and only the first one increments its zero count.

use crate::parser::schema::MetricRecord;
use std::collections::HashMap;

/// Aggregated call counts
///
/// **Public** - returned from `parser::parse`, read by chart derivation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    /// Distinct kinds in first-seen order
    kinds: Vec<String>,

    /// Total occurrences per kind (zero and nonzero)
    counts: HashMap<String, u64>,

    /// Zero-variant occurrences per kind; kinds never seen as `.zero` are absent
    zero_counts: HashMap<String, u64>,
}

impl AggregateState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the tallies
    ///
    /// **Public** - called once per non-blank log line
    pub fn record(&mut self, record: &MetricRecord) {
        match self.counts.get_mut(&record.kind) {
            Some(count) => *count += 1,
            None => {
                self.kinds.push(record.kind.clone());
                self.counts.insert(record.kind.clone(), 1);
            }
        }

        if record.is_zero {
            *self.zero_counts.entry(record.kind.clone()).or_insert(0) += 1;
        }
    }

    /// Distinct kinds in first-seen order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }

    /// Total occurrences of `kind`, 0 if never seen
    pub fn count(&self, kind: &str) -> u64 {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    /// Zero-variant occurrences of `kind`, 0 if never seen as `.zero`
    pub fn zero_count(&self, kind: &str) -> u64 {
        self.zero_counts.get(kind).copied().unwrap_or(0)
    }

    /// Occurrences of `kind` that were not the zero variant
    pub fn nonzero_count(&self, kind: &str) -> u64 {
        // zero lines also bump the total, so this cannot underflow
        self.count(kind).saturating_sub(self.zero_count(kind))
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.counts.contains_key(kind)
    }

    /// Number of distinct kinds
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Sum of all per-kind totals, i.e. the number of non-blank lines
    pub fn total_runs(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Sum of all zero-variant occurrences
    pub fn total_zero(&self) -> u64 {
        self.zero_counts.values().sum()
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Runs: {} | Kinds: {} | Zero results: {}",
            self.total_runs(),
            self.len(),
            self.total_zero()
        )
    }
}
