//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the source directory next to the wiki pages and is optional: stock
//! defaults are used for anything it does not set.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [pages]
//! # Titles pinned to the top of the sidebar, in this order.
//! order = ["Home", "Quick-start-‐-Demo-install", "Production-Install",
//!          "i2b2-Upgrade", "i2b2-Admin-Module"]
//! # File extensions treated as wiki pages (case-insensitive).
//! extensions = ["md", "readme"]
//!
//! [template]
//! # Page template, relative to the source directory.
//! # Omit to use the built-in template.
//! # file = "template.html"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want. Arrays are
//! replaced, not appended to.
//!
//! ```toml
//! [pages]
//! order = ["Home", "FAQ"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::order::PageOrder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the source directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Which files are pages and how they are ordered.
    pub pages: PagesConfig,
    /// Page template selection.
    pub template: TemplateConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "pages.extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self
            .pages
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "pages.extensions entries must be non-empty and without a leading dot, got {ext:?}"
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self
            .pages
            .order
            .titles()
            .iter()
            .find(|t| !seen.insert(t.as_str()))
        {
            return Err(ConfigError::Validation(format!(
                "pages.order lists {dup:?} more than once"
            )));
        }
        Ok(())
    }

    /// Resolve the configured template file against the source directory.
    ///
    /// `None` means the built-in template should be used.
    pub fn template_path(&self, source_dir: &Path) -> Option<PathBuf> {
        self.template.file.as_ref().map(|f| source_dir.join(f))
    }
}

/// Page discovery and ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagesConfig {
    /// Titles pinned to the top of the site, in order.
    pub order: PageOrder,
    /// File extensions (without the dot) treated as wiki pages.
    pub extensions: Vec<String>,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            order: PageOrder::new([
                "Home",
                "Quick-start-‐-Demo-install",
                "Production-Install",
                "i2b2-Upgrade",
                "i2b2-Admin-Module",
            ]),
            extensions: vec!["md".to_string(), "readme".to_string()],
        }
    }
}

impl PagesConfig {
    /// Whether `path` has one of the configured extensions (case-insensitive).
    pub fn is_page(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Page template selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template file relative to the source directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    if overlay.is_some() {
        log::info!("Loaded {}", dir.join(CONFIG_FILE).display());
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# wiki-site configuration
# =======================
# Place this file in the source directory, next to the wiki pages.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Pages
# ---------------------------------------------------------------------------
[pages]
# Page titles (file names without extension) pinned to the top of the
# sidebar, in this order. Matching is exact. Pages not listed here follow,
# sorted by file name.
order = [
    "Home",
    "Quick-start-‐-Demo-install",
    "Production-Install",
    "i2b2-Upgrade",
    "i2b2-Admin-Module",
]

# File extensions treated as wiki pages (case-insensitive, no leading dot).
extensions = ["md", "readme"]

# ---------------------------------------------------------------------------
# Template
# ---------------------------------------------------------------------------
[template]
# Jinja-style page template, relative to the source directory. It receives
# `title`, `sidebar` and `content`. Omit to use the built-in template.
# file = "template.html"
"##
}
