//! Cross-category identity deduplication.
//!
//! At most one finding survives per unique matched text across the entire
//! result set, no matter which category or pattern produced it. First seen
//! wins: the earliest raw match in scan order fixes the category and line
//! number the surviving finding reports.

use std::collections::HashSet;

use super::types::RawMatch;

/// One pass, O(n) with a membership set keyed by matched text.
pub fn dedup_first_seen(matches: Vec<RawMatch>) -> Vec<RawMatch> {
    let mut seen = HashSet::with_capacity(matches.len());
    matches
        .into_iter()
        .filter(|m| seen.insert(m.matched_text.clone()))
        .collect()
}
