//! Derive chart datasets from aggregated call counts.
//!
//! Two kinds of charts are produced:
//! - The global distribution across all distinct calls, sorted by name
//! - One zero/nonzero split per call, with the call's own total as basis

use super::state::AggregateState;
use crate::utils::config::ZERO_SUFFIX;
use log::debug;

/// A single bar of a chart
///
/// **Public** - handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    /// Bar label (call name)
    pub label: String,

    /// Number of occurrences
    pub value: u64,

    /// Share of the chart basis, in percent. NaN when the basis is 0.
    pub percent: f64,
}

impl ChartEntry {
    /// Create an entry and compute its percentage of `basis`
    ///
    /// **Public** - constructor
    pub fn new(label: impl Into<String>, value: u64, basis: u64) -> Self {
        Self {
            label: label.into(),
            value,
            percent: percent_of(value, basis),
        }
    }

    /// Label shown next to the bar, e.g. `2 (66.67%)`
    pub fn display_label(&self) -> String {
        format!("{} ({:.2}%)", self.value, self.percent)
    }
}

/// An ordered chart dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Denominator of every entry's percentage
    pub basis: u64,

    pub entries: Vec<ChartEntry>,
}

impl Chart {
    /// `(label, value)` pairs in chart order, as the renderer expects them
    pub fn items(&self) -> Vec<(&str, u64)> {
        self.entries
            .iter()
            .map(|entry| (entry.label.as_str(), entry.value))
            .collect()
    }

    /// Display label of the entry at `index`
    ///
    /// Used as the renderer's label callback.
    pub fn label_at(&self, index: usize) -> String {
        self.entries
            .get(index)
            .map(ChartEntry::display_label)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the distribution of runs across all distinct calls
///
/// **Public** - main entry point for the overview chart
///
/// # Returns
/// One entry per kind, sorted by label ascending. The basis is the total
/// number of runs; an empty state gives an empty chart with basis 0.
pub fn derive_global_chart(state: &AggregateState) -> Chart {
    let total_runs = state.total_runs();

    let mut entries: Vec<ChartEntry> = state
        .kinds()
        .map(|kind| ChartEntry::new(kind, state.count(kind), total_runs))
        .collect();

    entries.sort_by(|a, b| a.label.cmp(&b.label));

    debug!(
        "Global chart: {} kinds over {} runs",
        entries.len(),
        total_runs
    );

    Chart {
        basis: total_runs,
        entries,
    }
}

/// Derive the zero/nonzero split for a single call
///
/// **Public** - one chart per kind
///
/// # Returns
/// Two entries: `kind` with the nonzero count and `kind.zero` with the zero
/// count. Percentages use the kind's own total, so an unknown kind yields
/// NaN percentages rather than an error.
pub fn derive_kind_chart(state: &AggregateState, kind: &str) -> Chart {
    if !state.contains(kind) {
        debug!("Split chart requested for unseen kind {}", kind);
    }

    let total = state.count(kind);

    Chart {
        basis: total,
        entries: vec![
            ChartEntry::new(kind, state.nonzero_count(kind), total),
            ChartEntry::new(
                format!("{}{}", kind, ZERO_SUFFIX),
                state.zero_count(kind),
                total,
            ),
        ],
    }
}

/// Derive the split chart of every kind, in first-seen order
///
/// **Public** - convenience wrapper over derive_kind_chart
pub fn derive_kind_charts(state: &AggregateState) -> Vec<(String, Chart)> {
    state
        .kinds()
        .map(|kind| (kind.to_string(), derive_kind_chart(state, kind)))
        .collect()
}

/// Percentage of `value` in `basis`
///
/// **Private** - a zero basis gives NaN (0/0), which displays as `NaN%`
fn percent_of(value: u64, basis: u64) -> f64 {
    (value as f64 / basis as f64) * 100.0
}
