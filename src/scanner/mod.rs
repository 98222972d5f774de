pub mod context;
pub mod core;
pub mod dedup;
pub mod entropy;
pub mod matcher;
pub mod normalize;
pub mod patterns;
pub mod stats;
pub mod types;

// Re-export main types for easier access
pub use self::core::Scanner;
pub use entropy::{EntropyBand, band_for, shannon_entropy};
pub use patterns::{PatternGroups, PatternSet};
pub use stats::CategoryCounts;
pub use types::{Finding, RawMatch, ScanMode, ScanSession, ScanStats, ScannerConfig, SourceReport, Warning};
