//! Plain-line console rendering of scan results.
//!
//! One line per finding in the fixed tab-separated format
//! `{category}\t->\t{matched_text}\t(Line: {line})`, grouped under a
//! header naming the source, followed by a descending-count category
//! summary once every source has been reported.

use console::style;

use crate::scanner::types::{ScanSession, SourceReport};

/// Print one source's findings. Sources without findings stay silent.
pub fn print_report(report: &SourceReport) {
    for warning in &report.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning.message);
    }
    if report.findings.is_empty() {
        return;
    }
    println!("{} {}", style("[ + ] URL:").green().bold(), style(&report.source).cyan());
    for finding in &report.findings {
        println!(
            "{}\t->\t{}\t(Line: {})",
            finding.category,
            finding.matched_text.trim(),
            finding.line_number
        );
    }
}

/// Print the end-of-session summary: totals, then positive category
/// counts in descending order.
pub fn print_summary(session: &ScanSession, show_stats: bool) {
    println!(
        "{} A total of {} sources were scanned",
        style("[ - ]").dim(),
        session.stats.sources_scanned
    );
    if session.stats.sources_skipped > 0 {
        println!(
            "{} {} sources could not be read",
            style("[ - ]").dim(),
            session.stats.sources_skipped
        );
    }

    let positive = session.counts.positive();
    if positive.is_empty() {
        println!("{} No categories with occurrences greater than 0 found.", style("[ - ]").dim());
    } else {
        println!("{} Counts of categories with occurrences greater than 0:", style("[ - ]").dim());
        for (category, count) in positive {
            println!("{} {}: {}", style("[ matched ]").red().bold(), category, count);
        }
    }

    if show_stats {
        println!(
            "{} {} findings in {}ms",
            style("[ - ]").dim(),
            session.stats.total_findings,
            session.stats.scan_duration_ms
        );
    }
}
