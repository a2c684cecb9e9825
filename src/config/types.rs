// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]   dry, output_log_level, file_log_level, log_file, color
//! [scan]     strict, follow_links, include_hidden, max_depth, exclude
//! [listing]  skip_separators, skip_bridge_plugin
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::listing::LineFilter;
use crate::logging::LogLevel;
use crate::modinfo::ScanOptions;
use crate::utility::fs::walk::WalkOptions;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Report renames without touching the file system.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Colored console output.
    pub color: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            color: true,
        }
    }
}

/// How the mods tree is scanned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Fail on the first malformed `ModInfo.xml` instead of skipping it.
    pub strict: bool,
    pub follow_links: bool,
    pub include_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Globs, relative to the mods root, of paths to leave out.
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strict: true,
            follow_links: false,
            include_hidden: false,
            max_depth: None,
            exclude: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Scan options for [`crate::modinfo::scan`].
    #[must_use]
    pub fn to_scan_options(&self) -> ScanOptions {
        let defaults = WalkOptions::for_mods_dir();
        let walk = WalkOptions::builder()
            .maybe_with_max_depth(self.max_depth)
            .with_follow_links(self.follow_links)
            .with_include_hidden(self.include_hidden)
            .with_skip_dirs(defaults.skip_dirs().to_vec())
            .with_exclude(self.exclude.clone())
            .build();

        ScanOptions::builder()
            .with_strict(self.strict)
            .with_walk(walk)
            .build()
    }
}

/// Which `modlist.txt` lines are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Drop `..._separator` entries.
    pub skip_separators: bool,
    /// Drop the `7D2D MO2 Plugin` entry.
    pub skip_bridge_plugin: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            skip_separators: true,
            skip_bridge_plugin: true,
        }
    }
}

impl ListingConfig {
    #[must_use]
    pub fn line_filter(&self) -> LineFilter {
        let mut filter = LineFilter::empty();
        filter.set(LineFilter::SKIP_SEPARATORS, self.skip_separators);
        filter.set(LineFilter::SKIP_BRIDGE_PLUGIN, self.skip_bridge_plugin);
        filter
    }
}
