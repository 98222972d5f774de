//! Output adapters for scan results.
//!
//! Three formats are supported: plain text to stdout, a standalone
//! HTML page, and pretty-printed JSON.

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlReport;
