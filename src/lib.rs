//! # Leakhound - Sensitive Information Scanner
//!
//! Leakhound scans source files, directories, and fetched web content for
//! sensitive information: API keys, credentials, tokens, phone numbers, and
//! card-shaped values. Matches are located by line, deduplicated across
//! patterns, refined by per-category entropy bands, and reported as text,
//! HTML, or JSON.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan a directory
//! leakhound scan ./src
//!
//! # Scan a fetched page and write an HTML report
//! leakhound scan https://example.com/app.js --format html -o report.html
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod report;
pub mod scanner;

pub use cli::{Cli, Output};
pub use config::AppConfig;
pub use errors::ScanError;
pub use scanner::Scanner;

/// Result type alias for Leakhound operations
pub type Result<T> = anyhow::Result<T>;

/// Version of the leakhound crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
