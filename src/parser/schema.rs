//! Data types produced by the metrics log parser.

use crate::utils::config::ZERO_SUFFIX;

/// One event extracted from a metrics log line
///
/// **Public** - consumed by the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    /// Call identifier with any `.zero` suffix removed
    pub kind: String,

    /// Whether the line marked the zero variant of the call
    pub is_zero: bool,
}

impl MetricRecord {
    /// Build a record from a raw call identifier
    ///
    /// **Public** - constructor
    ///
    /// Strips a single trailing `.zero` and flags the record accordingly.
    pub fn from_call(call: &str) -> Self {
        match call.strip_suffix(ZERO_SUFFIX) {
            Some(kind) => Self {
                kind: kind.to_string(),
                is_zero: true,
            },
            None => Self {
                kind: call.to_string(),
                is_zero: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_call_plain() {
        let record = MetricRecord::from_call("deposit");
        assert_eq!(record.kind, "deposit");
        assert!(!record.is_zero);
    }

    #[test]
    fn test_from_call_zero() {
        let record = MetricRecord::from_call("deposit.zero");
        assert_eq!(record.kind, "deposit");
        assert!(record.is_zero);
    }

    #[test]
    fn test_from_call_strips_only_trailing_suffix() {
        let record = MetricRecord::from_call("a.zero.b");
        assert_eq!(record.kind, "a.zero.b");
        assert!(!record.is_zero);

        let record = MetricRecord::from_call("a.zero.zero");
        assert_eq!(record.kind, "a.zero");
        assert!(record.is_zero);
    }

    #[test]
    fn test_bare_suffix_is_zero_of_empty_kind() {
        let record = MetricRecord::from_call(".zero");
        assert_eq!(record.kind, "");
        assert!(record.is_zero);
    }
}
