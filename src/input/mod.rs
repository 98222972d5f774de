//! Content acquisition: turn CLI inputs into scannable sources and
//! materialize their text.
//!
//! Sources are local files (given directly or discovered by walking a
//! directory) or http(s) URLs. File content is decoded lossily: encoding
//! noise degrades a few characters, it never fails a scan. Suffix
//! include/exclude filters and path-glob excludes are applied during
//! discovery; a missing individual input is only fatal when nothing
//! scannable remains at all.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::errors::ScanError;

/// One scannable content unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Suffix and path filters applied while collecting file sources.
#[derive(Debug, Default, Clone)]
pub struct SourceFilter {
    /// Only files with one of these suffixes, when non-empty.
    pub include_suffixes: Vec<String>,
    /// Files with one of these suffixes are skipped.
    pub exclude_suffixes: Vec<String>,
    /// Glob patterns for paths skipped entirely.
    pub exclude_paths: Vec<String>,
}

impl SourceFilter {
    pub fn accepts(&self, path: &Path) -> bool {
        let name = path.to_string_lossy().to_lowercase();
        if !self.include_suffixes.is_empty()
            && !self.include_suffixes.iter().any(|s| name.ends_with(&dotted(s)))
        {
            return false;
        }
        !self.exclude_suffixes.iter().any(|s| name.ends_with(&dotted(s)))
    }

    fn exclude_globs(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_paths {
            builder.add(Glob::new(pattern)?);
        }
        Ok(builder.build()?)
    }
}

/// Normalize a suffix to its dotted, lowercased form ("js" -> ".js").
fn dotted(suffix: &str) -> String {
    let suffix = suffix.trim().to_lowercase();
    if suffix.starts_with('.') { suffix } else { format!(".{}", suffix) }
}

/// Expand the raw inputs (paths, directories, URLs) into sources.
///
/// Nonexistent paths are warned about and skipped; an empty final list is
/// the only fatal condition.
pub fn collect_sources(
    inputs: &[String],
    filter: &SourceFilter,
    follow_symlinks: bool,
) -> Result<Vec<Source>> {
    let exclude_globs = filter.exclude_globs()?;
    let mut sources = Vec::new();

    for input in inputs {
        if input.starts_with("http://") || input.starts_with("https://") {
            sources.push(Source::Url(input.clone()));
            continue;
        }

        let path = Path::new(input.trim_end_matches('/'));
        if path.is_dir() {
            collect_dir(path, filter, &exclude_globs, follow_symlinks, &mut sources);
        } else if path.is_file() {
            if filter.accepts(path) && !exclude_globs.is_match(path) {
                sources.push(Source::File(path.to_path_buf()));
            }
        } else {
            tracing::warn!("input not found, skipping: {}", input);
        }
    }

    if sources.is_empty() {
        return Err(ScanError::NoInput(inputs.join(", ")).into());
    }
    Ok(sources)
}

fn collect_dir(
    root: &Path,
    filter: &SourceFilter,
    exclude_globs: &GlobSet,
    follow_symlinks: bool,
    sources: &mut Vec<Source>,
) {
    let walker = WalkBuilder::new(root).follow_links(follow_symlinks).build();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                if filter.accepts(path) && !exclude_globs.is_match(path) {
                    sources.push(Source::File(path.to_path_buf()));
                }
            }
            Err(e) => tracing::warn!("walk error under {}: {}", root.display(), e),
        }
    }
}

/// Materialize a source's text. Decoding is lossy by design.
pub fn read_source(source: &Source) -> std::result::Result<String, ScanError> {
    match source {
        Source::File(path) => {
            let bytes = std::fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        Source::Url(url) => {
            let response = reqwest::blocking::get(url)
                .map_err(|e| ScanError::Fetch(url.clone(), e.to_string()))?;
            let bytes = response
                .bytes()
                .map_err(|e| ScanError::Fetch(url.clone(), e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn filter(include: &[&str], exclude: &[&str]) -> SourceFilter {
        SourceFilter {
            include_suffixes: include.iter().map(|s| s.to_string()).collect(),
            exclude_suffixes: exclude.iter().map(|s| s.to_string()).collect(),
            exclude_paths: Vec::new(),
        }
    }

    #[test]
    fn suffix_filters_normalize_dots_and_case() {
        let f = filter(&["js", ".TS"], &[]);
        assert!(f.accepts(Path::new("app.js")));
        assert!(f.accepts(Path::new("APP.JS")));
        assert!(f.accepts(Path::new("mod.ts")));
        assert!(!f.accepts(Path::new("style.css")));
    }

    #[test]
    fn exclude_suffix_wins_over_empty_include() {
        let f = filter(&[], &["png", "css"]);
        assert!(f.accepts(Path::new("app.js")));
        assert!(!f.accepts(Path::new("logo.png")));
        assert!(!f.accepts(Path::new("style.CSS")));
    }

    #[test]
    fn directory_walk_applies_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "x").unwrap();
        fs::write(dir.path().join("b.png"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.js"), "x").unwrap();

        let sources = collect_sources(
            &[dir.path().to_string_lossy().to_string()],
            &filter(&[], &["png"]),
            false,
        )
        .unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|s| s.to_string().ends_with(".js")));
    }

    #[test]
    fn url_inputs_pass_through() {
        let sources = collect_sources(
            &["https://example.com/app.js".to_string()],
            &SourceFilter::default(),
            false,
        )
        .unwrap();
        assert_eq!(sources, vec![Source::Url("https://example.com/app.js".to_string())]);
    }

    #[test]
    fn nothing_scannable_is_fatal() {
        let result = collect_sources(
            &["/definitely/not/here".to_string()],
            &SourceFilter::default(),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_bytes_decode_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [b'o', b'k', 0xFF, 0xFE, b'!']).unwrap();
        let content = read_source(&Source::File(path)).unwrap();
        assert!(content.starts_with("ok"));
        assert!(content.ends_with('!'));
    }

    #[test]
    fn path_globs_exclude_whole_subtrees() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/lib.js"), "x").unwrap();
        fs::write(dir.path().join("main.js"), "x").unwrap();

        let f = SourceFilter {
            exclude_paths: vec!["**/vendor/**".to_string()],
            ..Default::default()
        };
        let sources =
            collect_sources(&[dir.path().to_string_lossy().to_string()], &f, false).unwrap();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].to_string().ends_with("main.js"));
    }
}
