//! Per-category tallies for summary reporting.
//!
//! Pure bookkeeping: counts are incremented as findings are accepted and
//! read back once scanning completes. Instances are scoped to one session
//! and merged explicitly when units are scanned in parallel.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct CategoryCounts {
    counts: HashMap<String, usize>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: &str) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Fold another instance's tallies into this one.
    pub fn merge(&mut self, other: &CategoryCounts) {
        for (category, count) in &other.counts {
            *self.counts.entry(category.clone()).or_insert(0) += count;
        }
    }

    /// Categories with at least one finding, ordered by descending count;
    /// ties break alphabetically so the ordering is deterministic.
    pub fn positive(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(name, &count)| (name.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_is_sorted_descending() {
        let mut counts = CategoryCounts::new();
        for _ in 0..3 {
            counts.record("phone");
        }
        counts.record("google_api");
        for _ in 0..5 {
            counts.record("Possible_Creds");
        }
        let positive = counts.positive();
        assert_eq!(
            positive,
            vec![
                ("Possible_Creds".to_string(), 5),
                ("phone".to_string(), 3),
                ("google_api".to_string(), 1),
            ]
        );
    }

    #[test]
    fn merge_sums_per_category() {
        let mut a = CategoryCounts::new();
        a.record("phone");
        let mut b = CategoryCounts::new();
        b.record("phone");
        b.record("id_card");
        a.merge(&b);
        assert_eq!(a.get("phone"), 2);
        assert_eq!(a.get("id_card"), 1);
        assert_eq!(a.get("absent"), 0);
    }

    #[test]
    fn empty_counts_report_empty() {
        assert!(CategoryCounts::new().is_empty());
        let mut counts = CategoryCounts::new();
        counts.record("x");
        assert!(!counts.is_empty());
    }
}
