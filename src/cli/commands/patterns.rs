use anyhow::Result;
use clap::Args;
use console::style;

use crate::cli::Output;
use crate::scanner::patterns::{PatternGroups, PatternSet};

#[derive(Args)]
pub struct PatternsArgs {
    /// Include the hit keyword group
    #[arg(long)]
    pub keywords: bool,

    /// Include the dangerous sink function group
    #[arg(long)]
    pub sensitive_functions: bool,

    /// Include the vulnerability indicator group
    #[arg(long)]
    pub vulns: bool,
}

pub fn execute(args: PatternsArgs, output: &Output) -> Result<()> {
    let groups = PatternGroups {
        keywords: args.keywords,
        sensitive_functions: args.sensitive_functions,
        vulns: args.vulns,
    };
    let patterns = PatternSet::builtin(groups);
    for warning in &patterns.warnings {
        output.warning(&warning.message);
    }

    println!(
        "Leakhound {} detection categories ({} categories, {} patterns):",
        crate::VERSION,
        patterns.category_count(),
        patterns.pattern_count()
    );
    println!();
    for category in &patterns.categories {
        println!(
            "  - {} {}",
            style(&category.name).cyan(),
            style(format!("({})", category.regexes.len())).dim()
        );
    }
    Ok(())
}
