use serde::Serialize;

use super::stats::CategoryCounts;

/// One raw regex hit, before deduplication and filtering.
///
/// Offsets are byte positions into the normalized content. Multiple raw
/// matches may carry identical `matched_text` at different offsets or from
/// different categories; reduction into findings happens downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub matched_text: String,
    pub start: usize,
    pub end: usize,
    pub line_number: usize,
    pub category: String,
}

/// A deduplicated, optionally context-annotated, entropy-validated match.
///
/// At most one finding exists per unique matched text across the whole
/// result set of a source; `line_number` belongs to the first occurrence
/// encountered during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: String,
    pub matched_text: String,
    pub line_number: usize,
    /// Every surrounding excerpt of content containing the matched value,
    /// in content-search order. Empty in quick mode.
    pub contexts: Vec<String>,
    /// True iff more than one context excerpt was found.
    pub multi_context: bool,
}

impl Finding {
    /// A finding with no resolved context (quick mode, or a value that
    /// could not be re-located in the content).
    pub fn without_context(m: RawMatch) -> Self {
        Finding {
            category: m.category,
            matched_text: m.matched_text,
            line_number: m.line_number,
            contexts: Vec::new(),
            multi_context: false,
        }
    }
}

/// How much work the pipeline does per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Reformat dense content for accurate line numbers and resolve the
    /// surrounding context of every finding. Used for report output.
    #[default]
    Full,
    /// Skip normalization and context resolution entirely; findings carry
    /// empty contexts. Used for plain console output.
    Quick,
}

/// Statistics from a scanning session.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanStats {
    pub sources_scanned: usize,
    pub sources_skipped: usize,
    pub total_findings: usize,
    pub scan_duration_ms: u64,
}

/// Warning generated while scanning.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub message: String,
}

/// Everything produced by scanning one content source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub findings: Vec<Finding>,
    pub warnings: Vec<Warning>,
    /// True when the source could not be acquired at all.
    pub skipped: bool,
}

/// Per-session accumulator: category tallies plus run statistics.
///
/// Scoped to one scanning session and passed explicitly; concurrent
/// sessions each get their own instance.
#[derive(Debug, Default)]
pub struct ScanSession {
    pub counts: CategoryCounts,
    pub stats: ScanStats,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one source report into the session tallies.
    pub fn absorb(&mut self, report: &SourceReport) {
        if report.skipped {
            self.stats.sources_skipped += 1;
            return;
        }
        self.stats.sources_scanned += 1;
        self.stats.total_findings += report.findings.len();
        for finding in &report.findings {
            self.counts.record(&finding.category);
        }
    }
}

/// Configuration for the scanner pipeline.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub mode: ScanMode,
    /// Apply the per-category entropy band filter.
    pub entropy_filter: bool,
    /// Content longer than this gets the fast separator-based line splitter
    /// instead of the structural reformatter.
    pub max_reformat_len: usize,
    /// Wrap pattern placed on both sides of an escaped matched value when
    /// collecting context.
    pub context_wrap: String,
    /// Keep only findings whose matched text also matches this expression.
    pub refine: Option<regex::Regex>,
    /// Worker threads for multi-source scans; 0 = one per CPU core.
    pub jobs: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::Full,
            entropy_filter: true,
            max_reformat_len: super::normalize::MAX_REFORMAT_LEN,
            context_wrap: super::context::DEFAULT_WRAP.to_string(),
            refine: None,
            jobs: 0,
        }
    }
}
