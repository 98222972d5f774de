//! Custom error types for the leakhound library.
//!
//! Pipeline-internal failures are never fatal to a multi-source scan: a
//! pattern that fails to compile is skipped, undecodable content is decoded
//! lossily, and a source that cannot be read becomes a warning on its
//! report. The variants here exist so callers can tell those cases apart.

use thiserror::Error;

/// All error types surfaced by the leakhound library.
///
/// `#[non_exhaustive]` signals that new variants may be added in future
/// versions without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    #[error("failed to compile pattern '{1}' in category '{0}': {2}")]
    PatternCompile(String, String, regex::Error),

    #[error("failed to fetch '{0}': {1}")]
    Fetch(String, String),

    #[error("no readable input at '{0}'")]
    NoInput(String),

    #[error("invalid filter expression '{0}': {1}")]
    InvalidFilter(String, regex::Error),

    #[error("an unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
