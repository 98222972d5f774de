//! Context resolution: locate every surrounding excerpt of content that
//! contains a matched value, so a human can judge true or false positive.
//!
//! The matched text is escaped and treated as a literal; the wrap pattern
//! (default: a minimal run of one-or-more characters on each side) defines
//! how much surrounding text an excerpt carries. All occurrences are kept
//! in content-search order. Failing to re-locate the value is not an
//! error; the finding simply carries no context.

use regex::RegexBuilder;

use super::types::{Finding, RawMatch};

/// Default wrap pattern: shortest non-empty run on both sides, which in
/// practice yields the rest of the line around the value.
pub const DEFAULT_WRAP: &str = ".+?";

/// Build a finding from a unique raw match, collecting every context
/// occurrence of its text in the content.
pub fn resolve_contexts(m: RawMatch, content: &str, wrap: &str) -> Finding {
    let pattern = format!("{}{}{}", wrap, regex::escape(&m.matched_text), wrap);
    let contexts: Vec<String> = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => regex
            .find_iter(content)
            .map(|occurrence| occurrence.as_str().to_string())
            .collect(),
        Err(e) => {
            // Only reachable with a broken user-supplied wrap pattern; the
            // matched text itself is escaped.
            tracing::warn!("context pattern failed for '{}': {}", m.category, e);
            Vec::new()
        }
    };
    let multi_context = contexts.len() > 1;
    Finding {
        category: m.category,
        matched_text: m.matched_text,
        line_number: m.line_number,
        contexts,
        multi_context,
    }
}
