//! Configuration for staffview.
//!
//! Settings come from `.staffview.toml`, found by walking up from the working
//! directory, or from `staffview/config.toml` in the user config directory.
//! Every section is optional; command-line flags override what is loaded.

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_config,
    CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML,
};

use crate::formatting::ColorMode;
use crate::matching::{DEFAULT_MAX_PER_CASE, DEFAULT_MIN_RATE};
use crate::view::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffviewConfig {
    #[serde(default)]
    pub list: ListConfig,

    /// Fields searched by the free-text query, per list
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Wire names of the searched fields. Empty lists keep each record's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub engineers: Vec<String>,
    #[serde(default)]
    pub cases: Vec<String>,
    #[serde(default)]
    pub matchings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Lowest matching rate (percent) kept
    #[serde(default = "default_min_rate")]
    pub min_rate: u32,
    #[serde(default = "default_max_per_case")]
    pub max_per_case: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_rate: default_min_rate(),
            max_per_case: default_max_per_case(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `terminal`, `json` or `markdown`
    #[serde(default = "default_format")]
    pub default_format: String,
    /// `auto`, `always` or `never`
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            color: default_color(),
        }
    }
}

impl OutputConfig {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::parse(&self.color).unwrap_or(ColorMode::Auto)
    }
}

impl StaffviewConfig {
    /// Replace out-of-range values with defaults, warning about each.
    pub fn normalize(mut self) -> Self {
        if self.list.page_size == 0 {
            log::warn!("list.page_size must be at least 1. Using {}.", DEFAULT_PAGE_SIZE);
            self.list.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.matching.min_rate > 100 {
            log::warn!(
                "matching.min_rate {} exceeds 100. Using {}.",
                self.matching.min_rate,
                DEFAULT_MIN_RATE
            );
            self.matching.min_rate = DEFAULT_MIN_RATE;
        }
        if self.matching.max_per_case == 0 {
            log::warn!(
                "matching.max_per_case must be at least 1. Using {}.",
                DEFAULT_MAX_PER_CASE
            );
            self.matching.max_per_case = DEFAULT_MAX_PER_CASE;
        }
        if ColorMode::parse(&self.output.color).is_none() {
            log::warn!("Unknown output.color '{}'. Using auto.", self.output.color);
            self.output.color = default_color();
        }
        self
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_min_rate() -> u32 {
    DEFAULT_MIN_RATE
}

fn default_max_per_case() -> usize {
    DEFAULT_MAX_PER_CASE
}

fn default_format() -> String {
    "terminal".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        let config: StaffviewConfig = toml::from_str("").unwrap();
        assert_eq!(config, StaffviewConfig::default());
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.matching.min_rate, 50);
    }

    #[test]
    fn test_partial_sections() {
        let config: StaffviewConfig = toml::from_str(
            r#"
            [list]
            page_size = 25

            [search]
            engineers = ["name", "nationality"]
            "#,
        )
        .unwrap();
        assert_eq!(config.list.page_size, 25);
        assert_eq!(config.search.engineers, vec!["name", "nationality"]);
        assert!(config.search.cases.is_empty());
        assert_eq!(config.matching, MatchingConfig::default());
    }

    #[test]
    fn test_normalize_replaces_invalid_values() {
        let mut config = StaffviewConfig::default();
        config.list.page_size = 0;
        config.matching.min_rate = 140;
        config.matching.max_per_case = 0;
        config.output.color = "rainbow".into();

        let config = config.normalize();
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.matching.min_rate, DEFAULT_MIN_RATE);
        assert_eq!(config.matching.max_per_case, DEFAULT_MAX_PER_CASE);
        assert_eq!(config.output.color_mode(), ColorMode::Auto);
    }
}
