//! Command-line interface for Leakhound
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Leakhound - Sensitive information scanner for source and web content
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true, env = "LEAKHOUND_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan files, directories, or URLs for sensitive information
    Scan(commands::scan::ScanArgs),
    /// List the detection categories that would be applied
    Patterns(commands::patterns::PatternsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let config = crate::config::AppConfig::load_with_custom_config(self.config.as_deref())?;
        let output = Output::new(self.verbose, self.quiet, config.report.color);

        match self.command {
            Some(Commands::Scan(args)) => commands::scan::execute(args, &config, &output),
            Some(Commands::Patterns(args)) => commands::patterns::execute(args, &output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
