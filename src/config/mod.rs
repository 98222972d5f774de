//! Configuration management for Leakhound
//!
//! Settings are layered: embedded defaults, then a user config file,
//! then a repository-local config file, then `LEAKHOUND_`-prefixed
//! environment variables. Any layer may be TOML, JSON, or YAML.

use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Fully merged, typed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub scanner: ScannerSettings,
    pub input: InputSettings,
    pub report: ReportSettings,
}

/// Settings that shape the scan pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerSettings {
    /// Drop findings whose category has an entropy band and whose
    /// entropy falls outside it.
    pub entropy_filter: bool,

    /// Content longer than this gets the cheap separator-based
    /// normalization instead of the full reformat.
    pub max_reformat_len: usize,

    /// Regex fragment wrapped around escaped match text when
    /// extracting context lines.
    pub context_wrap: String,

    /// Worker threads for scanning. Zero means one per logical CPU.
    pub jobs: usize,
}

/// Settings controlling which sources are collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    pub follow_symlinks: bool,

    /// Glob patterns for paths to skip during directory walks.
    pub exclude_paths: Vec<String>,

    /// File suffixes to skip (binary assets, fonts, media).
    pub exclude_suffixes: Vec<String>,
}

/// Settings for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    pub color: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(Self::user_config_path()))
                .merge(Json::file(Self::user_config_path().replace(".toml", ".json")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yaml")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yml")))
                // Working-directory config - support multiple formats
                .merge(Toml::file("leakhound.toml"))
                .merge(Json::file("leakhound.json"))
                .merge(Yaml::file("leakhound.yaml"))
                .merge(Yaml::file("leakhound.yml"));
        }

        // Environment variables always have highest priority
        // Double underscore separates sections: LEAKHOUND_SCANNER__JOBS=4
        figment = figment.merge(Env::prefixed("LEAKHOUND_").split("__"));

        Ok(figment.extract()?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/leakhound/config.toml", home),
            Err(_) => "~/.config/leakhound/config.toml".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_embedded_defaults() {
        let config = AppConfig::load().expect("default config should load");
        assert!(config.scanner.entropy_filter);
        assert_eq!(config.scanner.max_reformat_len, 1_000_000);
        assert_eq!(config.scanner.context_wrap, ".+?");
        assert_eq!(config.scanner.jobs, 0);
        assert!(!config.input.follow_symlinks);
        assert!(config.input.exclude_suffixes.iter().any(|s| s == "png"));
        assert!(config.report.color);
    }

    #[test]
    fn missing_custom_config_falls_back_to_defaults() {
        let config = AppConfig::load_with_custom_config(Some("non_existent.toml"));
        assert!(config.is_ok());
    }

    #[test]
    fn custom_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[scanner]\njobs = 2\nentropy_filter = false\n").unwrap();

        let config =
            AppConfig::load_with_custom_config(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.scanner.jobs, 2);
        assert!(!config.scanner.entropy_filter);
        // Untouched sections keep their defaults
        assert_eq!(config.scanner.max_reformat_len, 1_000_000);
    }
}
