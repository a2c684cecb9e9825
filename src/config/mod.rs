// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for smoot.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. smoot.toml (cwd, optional)
//! 3. --config FILE (repeatable, required)
//! 4. SMOOT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SMOOT_GLOBAL__DRY=true          → global.dry = true
//! SMOOT_SCAN__STRICT=false        → scan.strict = false
//! SMOOT_LISTING__SKIP_SEPARATORS  → listing.skip_separators
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, ListingConfig, ScanConfig};

/// File name of the optional configuration in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "smoot.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SMOOT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Mods tree scanning.
    pub scan: ScanConfig,
    /// Listing parsing.
    pub listing: ListingConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use smoot::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("smoot.toml")
    ///     .with_env_prefix("SMOOT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing file and
    /// [`ConfigError::ParseError`] if it contains invalid TOML or does not
    /// match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        Self::builder().add_toml_file(path).build().map_err(|e| {
            anyhow::Error::from(ConfigError::ParseError {
                path: path.display().to_string(),
                message: format!("{e:#}"),
            })
        })
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an exclude pattern that is not a
    /// valid glob.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for pattern in &self.scan.exclude {
            if let Err(e) = wax::Glob::new(pattern) {
                return Err(ConfigError::InvalidValue {
                    section: "scan".to_string(),
                    key: "exclude".to_string(),
                    message: format!("invalid glob '{pattern}': {e}"),
                });
            }
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_scan_options(&mut options);
        self.format_listing_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.color".into(), self.global.color.to_string());
    }

    fn format_scan_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("scan.strict".into(), self.scan.strict.to_string());
        options.insert(
            "scan.follow_links".into(),
            self.scan.follow_links.to_string(),
        );
        options.insert(
            "scan.include_hidden".into(),
            self.scan.include_hidden.to_string(),
        );
        if let Some(depth) = self.scan.max_depth {
            options.insert("scan.max_depth".into(), depth.to_string());
        }
        options.insert("scan.exclude".into(), self.scan.exclude.join(", "));
    }

    fn format_listing_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "listing.skip_separators".into(),
            self.listing.skip_separators.to_string(),
        );
        options.insert(
            "listing.skip_bridge_plugin".into(),
            self.listing.skip_bridge_plugin.to_string(),
        );
    }
}
