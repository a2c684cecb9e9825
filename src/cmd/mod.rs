// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   sort, create, config (options / inis)
//! ```

pub mod config;
pub mod create;
pub mod sort;

use tracing::warn;

use crate::modinfo::ModInfos;

/// Warns about everything a scan left out or could not decide.
pub(crate) fn report_scan_problems(mods: &ModInfos) {
    for skipped in mods.skipped() {
        warn!(
            path = %skipped.path.display(),
            reason = %skipped.reason,
            "Skipped malformed ModInfo.xml"
        );
    }
    for dup in mods.duplicates() {
        warn!(
            name = %dup.dir_name,
            kept = %dup.kept.display(),
            ignored = %dup.shadowed.display(),
            "Duplicate mod folder name"
        );
    }
    for message in mods.walk_errors() {
        warn!(error = %message, "Could not read part of the mods directory");
    }
}
