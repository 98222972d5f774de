//! Single-page HTML report rendering.
//!
//! Findings are collected per source into one editable page: an `<h1>`
//! header linking each source, a labeled block per finding, and one
//! shaded container per distinct context excerpt (repeated excerpts are
//! collapsed). Every interpolated value is HTML-escaped; the assembled
//! body is dropped into the page shell unescaped.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tinytemplate::{TinyTemplate, format_unescaped};

use crate::scanner::types::SourceReport;

static PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>
       h1 \{
          font-family: sans-serif;
       }
       a \{
          color: #000;
       }
       .text \{
          font-size: 16px;
          font-family: Helvetica, sans-serif;
          color: #323232;
          background-color: white;
       }
       .container \{
          background-color: #e9e9e9;
          padding: 10px;
          margin: 10px 0;
          font-family: helvetica;
          font-size: 13px;
          border-width: 1px;
          border-style: solid;
          border-color: #8a8a8a;
          color: #323232;
          margin-bottom: 15px;
       }
  </style>
  <title>Leakhound Report</title>
</head>
<body contenteditable="true">
  {content}
</body>
</html>
"#;

#[derive(Serialize)]
struct Page {
    content: String,
}

/// Accumulates per-source fragments and renders the final page.
#[derive(Default)]
pub struct HtmlReport {
    body: String,
}

impl HtmlReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one source's findings to the page body. Sources without
    /// findings are left out entirely.
    pub fn add_report(&mut self, report: &SourceReport) {
        if report.findings.is_empty() {
            return;
        }
        let source = esc(&report.source);
        self.body.push_str(&format!(
            "<h1>File: <a href=\"{}\" target=\"_blank\" rel=\"nofollow noopener noreferrer\">{}</a></h1>\n",
            source, source
        ));
        for finding in &report.findings {
            self.body.push_str(&format!(
                "<div class=\"text\">{} (Line: {})",
                esc(&finding.category.replace('_', " ")),
                finding.line_number
            ));
            let mut rendered: Vec<&str> = Vec::new();
            for context in &finding.contexts {
                if context.is_empty() || rendered.contains(&context.as_str()) {
                    continue;
                }
                rendered.push(context);
                self.body
                    .push_str(&format!("<div class=\"container\">{}</div>", esc(context)));
                if !finding.multi_context {
                    break;
                }
            }
            self.body.push_str("</div>\n");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Render the full page.
    pub fn render(&self) -> Result<String> {
        let mut tt = TinyTemplate::new();
        // The body fragments are escaped as they are built.
        tt.set_default_formatter(&format_unescaped);
        tt.add_template("page", PAGE_TEMPLATE)
            .context("failed to parse the report template")?;
        tt.render("page", &Page { content: self.body.clone() })
            .context("failed to render the report")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let html = self.render()?;
        std::fs::write(path, html)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}

/// HTML-escape one interpolated value.
fn esc(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    tinytemplate::escape(value, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::types::{Finding, SourceReport};

    fn report_with(findings: Vec<Finding>) -> SourceReport {
        SourceReport {
            source: "test.js".to_string(),
            findings,
            warnings: Vec::new(),
            skipped: false,
        }
    }

    fn finding(category: &str, text: &str, contexts: Vec<&str>) -> Finding {
        let contexts: Vec<String> = contexts.into_iter().map(str::to_string).collect();
        let multi_context = contexts.len() > 1;
        Finding {
            category: category.to_string(),
            matched_text: text.to_string(),
            line_number: 3,
            contexts,
            multi_context,
        }
    }

    #[test]
    fn page_contains_escaped_findings() {
        let mut html = HtmlReport::new();
        html.add_report(&report_with(vec![finding(
            "Possible_Creds",
            "s3cret",
            vec!["var x = '<s3cret>';"],
        )]));
        let page = html.render().unwrap();
        assert!(page.contains("Possible Creds (Line: 3)"));
        assert!(page.contains("&lt;s3cret&gt;"));
        assert!(!page.contains("<s3cret>"));
        assert!(page.contains("<body contenteditable=\"true\">"));
    }

    #[test]
    fn duplicate_contexts_are_collapsed() {
        let mut html = HtmlReport::new();
        html.add_report(&report_with(vec![finding(
            "phone",
            "13812345678",
            vec!["ctx one", "ctx one", "ctx two"],
        )]));
        let page = html.render().unwrap();
        assert_eq!(page.matches("ctx one").count(), 1);
        assert_eq!(page.matches("ctx two").count(), 1);
    }

    #[test]
    fn empty_reports_add_nothing() {
        let mut html = HtmlReport::new();
        html.add_report(&report_with(Vec::new()));
        assert!(html.is_empty());
    }
}
