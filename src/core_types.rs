//! Defines the core data structures produced by an export run.

/// The terminal state of a traversal: the concatenated export text plus the
/// bookkeeping counters accumulated while walking the tree.
///
/// Every file visited is accounted for exactly once: it is either included,
/// or it increments exactly one of the three skip counters. Directories only
/// ever touch [`skipped_rules`](Self::skipped_rules), and only when they are
/// pruned by the exclusion policy. Files omitted because their content could
/// not be read touch nothing.
///
/// # Examples
///
/// ```
/// use projtext::core_types::RunOutcome;
///
/// let outcome = RunOutcome::default();
/// assert_eq!(outcome.included, 0);
/// assert_eq!(outcome.total_skipped(), 0);
/// assert!(outcome.export.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// The concatenated export text, one record per included file, in
    /// traversal order.
    pub export: String,
    /// Number of files whose content was appended to the export.
    pub included: usize,
    /// Files and pruned directories excluded by ignore rules, blocklists,
    /// self-exclusion, or hidden-path suppression.
    pub skipped_rules: usize,
    /// Files skipped because their size strictly exceeded the limit.
    pub skipped_size: usize,
    /// Files skipped because the sniffer classified them as binary.
    pub skipped_binary: usize,
}

impl RunOutcome {
    /// Sum of the three skip counters.
    pub fn total_skipped(&self) -> usize {
        self.skipped_rules + self.skipped_size + self.skipped_binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_skipped_sums_all_categories() {
        let outcome = RunOutcome {
            export: String::new(),
            included: 4,
            skipped_rules: 2,
            skipped_size: 1,
            skipped_binary: 3,
        };
        assert_eq!(outcome.total_skipped(), 6);
    }
}
