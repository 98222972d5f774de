//! JSON rendering of scan results for machine consumption.

use anyhow::Result;
use serde::Serialize;

use crate::scanner::types::{ScanSession, ScanStats, SourceReport};

#[derive(Serialize)]
struct JsonReport<'a> {
    sources: &'a [SourceReport],
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    stats: ScanStats,
    category_counts: Vec<CategoryCount>,
}

#[derive(Serialize)]
struct CategoryCount {
    category: String,
    count: usize,
}

pub fn render(reports: &[SourceReport], session: &ScanSession) -> Result<String> {
    let category_counts = session
        .counts
        .positive()
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    let report = JsonReport {
        sources: reports,
        summary: Summary { stats: session.stats.clone(), category_counts },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::types::{Finding, SourceReport};

    #[test]
    fn output_carries_findings_and_ordered_counts() {
        let report = SourceReport {
            source: "a.js".to_string(),
            findings: vec![Finding {
                category: "google_api".to_string(),
                matched_text: "AIzaSyexample".to_string(),
                line_number: 7,
                contexts: Vec::new(),
                multi_context: false,
            }],
            warnings: Vec::new(),
            skipped: false,
        };
        let mut session = ScanSession::default();
        session.absorb(&report);

        let json = render(std::slice::from_ref(&report), &session).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sources"][0]["findings"][0]["line_number"], 7);
        assert_eq!(value["summary"]["category_counts"][0]["category"], "google_api");
        assert_eq!(value["summary"]["stats"]["total_findings"], 1);
    }
}
