use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::AppConfig;
use crate::errors::ScanError;
use crate::input::{SourceFilter, collect_sources};
use crate::report::{self, HtmlReport};
use crate::scanner::patterns::{PatternGroups, PatternSet, compile_pattern};
use crate::scanner::types::{ScanMode, ScanSession, ScannerConfig};
use crate::scanner::Scanner;

#[derive(Args)]
pub struct ScanArgs {
    /// Files, directories, or URLs to scan
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Also match hit keywords (login endpoints, token parameters)
    #[arg(long)]
    pub keywords: bool,

    /// Also match calls to dangerous sink functions
    #[arg(long)]
    pub sensitive_functions: bool,

    /// Also match vulnerability indicator patterns
    #[arg(long)]
    pub vulns: bool,

    /// Extra file suffixes to skip, separated by ';'
    #[arg(short = 'x', long, value_delimiter = ';', value_name = "SUFFIX")]
    pub exclude: Vec<String>,

    /// Only scan files with these suffixes, separated by ';'
    #[arg(long, value_delimiter = ';', value_name = "SUFFIX")]
    pub only_type: Vec<String>,

    /// JSON file with additional named patterns
    #[arg(long, value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Secondary regex; keep only findings whose matched text it matches
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip content normalization and context extraction (faster)
    #[arg(long)]
    pub quick: bool,

    /// Disable entropy band filtering
    #[arg(long)]
    pub no_entropy: bool,

    /// Show statistics after scanning
    #[arg(long)]
    pub stats: bool,

    /// Worker threads (default: one per logical CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text output
    Text,
    /// Standalone HTML page
    Html,
    /// JSON format
    Json,
}

pub fn execute(args: ScanArgs, config: &AppConfig, output: &Output) -> Result<()> {
    let groups = PatternGroups {
        keywords: args.keywords,
        sensitive_functions: args.sensitive_functions,
        vulns: args.vulns,
    };
    let mut patterns = PatternSet::builtin(groups);

    if let Some(path) = &args.patterns_file {
        patterns
            .merge_json_file(path)
            .with_context(|| format!("failed to load patterns from {}", path.display()))?;
    }
    for warning in &patterns.warnings {
        output.warning(&warning.message);
    }

    let refine = match &args.filter {
        Some(expr) => Some(
            compile_pattern(expr).map_err(|e| ScanError::InvalidFilter(expr.clone(), e))?,
        ),
        None => None,
    };

    // Text output never shows context lines, so the cheap pipeline is
    // enough for it. HTML and JSON reports carry contexts and need the
    // full pipeline unless --quick overrides.
    let mode = if args.quick || matches!(args.format, ReportFormat::Text) {
        ScanMode::Quick
    } else {
        ScanMode::Full
    };

    let scanner_config = ScannerConfig {
        mode,
        entropy_filter: config.scanner.entropy_filter && !args.no_entropy,
        max_reformat_len: config.scanner.max_reformat_len,
        context_wrap: config.scanner.context_wrap.clone(),
        refine,
        jobs: args.jobs.unwrap_or(config.scanner.jobs),
    };
    let scanner = Scanner::new(patterns, scanner_config);

    let mut filter = SourceFilter {
        include_suffixes: args.only_type.clone(),
        exclude_suffixes: config.input.exclude_suffixes.clone(),
        exclude_paths: config.input.exclude_paths.clone(),
    };
    filter.exclude_suffixes.extend(args.exclude.iter().cloned());

    let sources = collect_sources(&args.inputs, &filter, config.input.follow_symlinks)?;
    output.verbose(&format!("collected {} source(s)", sources.len()));

    let mut session = ScanSession::new();
    let reports = scanner.scan_sources(&sources, &mut session)?;

    match args.format {
        ReportFormat::Text => {
            for report in &reports {
                report::text::print_report(report);
            }
            if !output.is_quiet() {
                report::text::print_summary(&session, args.stats);
            }
        }
        ReportFormat::Html => {
            let mut html = HtmlReport::new();
            for report in &reports {
                html.add_report(report);
            }
            if html.is_empty() {
                output.success("nothing matched, no report written");
            } else {
                let path = args
                    .output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("leakhound_report.html"));
                html.write_to(&path)?;
                output.info(&format!("report saved to {}", path.display()));
            }
        }
        ReportFormat::Json => {
            let rendered = report::json::render(&reports, &session)?;
            match &args.output {
                Some(path) => {
                    std::fs::write(path, rendered)?;
                    output.info(&format!("report saved to {}", path.display()));
                }
                None => println!("{}", rendered),
            }
        }
    }

    // Exit with error code if sensitive content was found
    if session.stats.total_findings > 0 {
        std::process::exit(1);
    }

    Ok(())
}
