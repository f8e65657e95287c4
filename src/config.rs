//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! match the scraped dataset this tool was written for, so running without a
//! config file works out of the box; a user config only overrides the keys it
//! names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input = "restaurant_119HW.csv"  # CSV export to read
//! output = "docs"                 # Output root for the generated site
//! strict_columns = false          # Fail when a configured header is missing
//!
//! [columns]
//! name = "qBF1Pd"
//! map_url = "hfpxzc href"
//! rating = "MW4etd"
//! review_count = "UY7F9"
//! category = "W4Efsd"
//! address = "W4Efsd (3)"
//! status = "W4Efsd (4)"
//! hours = "W4Efsd (5)"
//! image_url = "FQ2IWe src"
//! services = ["ah5Ghc", "ah5Ghc (2)", "ah5Ghc (3)"]
//! action_label = "J8zHNe"
//! action_url = "A1zNzb href"
//! price = "AJB7ye (2)"
//! secondary_label = "J8zHNe (2)"
//! secondary_url = "A1zNzb href (2)"
//! ```
//!
//! ## Column Mapping
//!
//! The CSV headers are opaque class names from the scraper, not semantic
//! names. [`ColumnConfig`] maps each logical restaurant field to the header it
//! is read from. The scan stage resolves this mapping against the header row
//! once, before any record is built.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound on service columns; the detail page shows at most three tags.
pub const MAX_SERVICE_COLUMNS: usize = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// CSV file to read (UTF-8, optional BOM, header row required).
    pub input: PathBuf,
    /// Output root; receives `index.html`, `assets/` and `restaurants/`.
    pub output: PathBuf,
    /// Treat configured headers missing from the CSV as a fatal error.
    pub strict_columns: bool,
    /// Logical field → CSV header mapping.
    pub columns: ColumnConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("restaurant_119HW.csv"),
            output: PathBuf::from("docs"),
            strict_columns: false,
            columns: ColumnConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::Validation("input must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.columns.services.len() > MAX_SERVICE_COLUMNS {
            return Err(ConfigError::Validation(format!(
                "columns.services accepts at most {MAX_SERVICE_COLUMNS} headers"
            )));
        }
        if let Some(field) = self
            .columns
            .headers()
            .into_iter()
            .find(|(_, header)| header.trim().is_empty())
            .map(|(field, _)| field)
        {
            return Err(ConfigError::Validation(format!(
                "columns.{field} must not be empty"
            )));
        }
        Ok(())
    }
}

/// CSV header names for each restaurant field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,
    pub map_url: String,
    pub rating: String,
    pub review_count: String,
    pub category: String,
    pub address: String,
    pub status: String,
    pub hours: String,
    pub image_url: String,
    /// Service tag columns, read in order.
    pub services: Vec<String>,
    pub action_label: String,
    pub action_url: String,
    pub price: String,
    /// Label of the alternate link.
    pub secondary_label: String,
    /// URL of the alternate link.
    pub secondary_url: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            name: "qBF1Pd".to_string(),
            map_url: "hfpxzc href".to_string(),
            rating: "MW4etd".to_string(),
            review_count: "UY7F9".to_string(),
            category: "W4Efsd".to_string(),
            address: "W4Efsd (3)".to_string(),
            status: "W4Efsd (4)".to_string(),
            hours: "W4Efsd (5)".to_string(),
            image_url: "FQ2IWe src".to_string(),
            services: vec![
                "ah5Ghc".to_string(),
                "ah5Ghc (2)".to_string(),
                "ah5Ghc (3)".to_string(),
            ],
            action_label: "J8zHNe".to_string(),
            action_url: "A1zNzb href".to_string(),
            price: "AJB7ye (2)".to_string(),
            secondary_label: "J8zHNe (2)".to_string(),
            secondary_url: "A1zNzb href (2)".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Every configured header, paired with the config key it came from.
    pub fn headers(&self) -> Vec<(String, &str)> {
        let mut headers = vec![
            ("name".to_string(), self.name.as_str()),
            ("map_url".to_string(), self.map_url.as_str()),
            ("rating".to_string(), self.rating.as_str()),
            ("review_count".to_string(), self.review_count.as_str()),
            ("category".to_string(), self.category.as_str()),
            ("address".to_string(), self.address.as_str()),
            ("status".to_string(), self.status.as_str()),
            ("hours".to_string(), self.hours.as_str()),
            ("image_url".to_string(), self.image_url.as_str()),
        ];
        for (i, header) in self.services.iter().enumerate() {
            headers.push((format!("services[{i}]"), header.as_str()));
        }
        headers.extend([
            ("action_label".to_string(), self.action_label.as_str()),
            ("action_url".to_string(), self.action_url.as_str()),
            ("price".to_string(), self.price.as_str()),
            ("secondary_label".to_string(), self.secondary_label.as_str()),
            ("secondary_url".to_string(), self.secondary_url.as_str()),
        ]);
        headers
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given `config.toml` path.
///
/// A missing file yields the stock defaults; a file that exists but does not
/// parse, names unknown keys, or fails validation is an error.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return resolve_config(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Menu Site Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# CSV export to read. UTF-8, optionally with a byte-order mark.
# The first row must be the header row.
input = "restaurant_119HW.csv"

# Output root. The generator writes:
#   <output>/index.html
#   <output>/assets/style.css            (only if it does not exist yet)
#   <output>/restaurants/<slug>/index.html
output = "docs"

# When true, a configured header missing from the CSV aborts the run.
# When false, the missing column reads as empty for every row.
strict_columns = false

# ---------------------------------------------------------------------------
# Column mapping: restaurant field -> CSV header
# ---------------------------------------------------------------------------
[columns]
name = "qBF1Pd"
map_url = "hfpxzc href"
rating = "MW4etd"
# Conventionally wrapped in parentheses, e.g. "(128)"; they are stripped.
review_count = "UY7F9"
category = "W4Efsd"
address = "W4Efsd (3)"
status = "W4Efsd (4)"
hours = "W4Efsd (5)"
image_url = "FQ2IWe src"
# Up to three service tag columns, read in order.
services = ["ah5Ghc", "ah5Ghc (2)", "ah5Ghc (3)"]
# Primary call-to-action; shown only when both label and URL are present.
action_label = "J8zHNe"
action_url = "A1zNzb href"
price = "AJB7ye (2)"
# Alternate link; shown only when both label and URL are present.
secondary_label = "J8zHNe (2)"
secondary_url = "A1zNzb href (2)"
"##
}
