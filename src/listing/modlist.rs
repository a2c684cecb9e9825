// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod Organizer 2 `modlist.txt`.
//!
//! ```text
//! # This file was automatically generated by Mod Organizer.
//! +ModC                 priority 3
//! -Disabled             (not enabled)
//! +Tools_separator      (separator)
//! +7D2D MO2 Plugin      (bridge plugin)
//! +ModB                 priority 2
//! +ModA                 priority 1
//! ```

use super::{LineFilter, LoadOrderEntry};
use crate::error::ListingError;
use crate::priority::Priority;

/// Suffix MO2 gives separator pseudo-mods.
pub const SEPARATOR_SUFFIX: &str = "_separator";

/// Name of the 7D2D MO2 plugin entry.
pub const BRIDGE_PLUGIN_NAME: &str = "7D2D MO2 Plugin";

fn is_kept(name: &str, filter: LineFilter) -> bool {
    if name.is_empty() {
        return false;
    }
    if filter.contains(LineFilter::SKIP_SEPARATORS) && name.ends_with(SEPARATOR_SUFFIX) {
        return false;
    }
    !(filter.contains(LineFilter::SKIP_BRIDGE_PLUGIN) && name.contains(BRIDGE_PLUGIN_NAME))
}

pub(super) fn parse(text: &str, filter: LineFilter) -> Result<Vec<LoadOrderEntry>, ListingError> {
    let names: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter_map(|line| line.strip_prefix('+'))
        .filter(|name| is_kept(name, filter))
        .collect();

    let total = u32::try_from(names.len())
        .map_err(|_| ListingError::malformed(names.len(), "too many enabled mods"))?;

    // top line loads last: N, N-1, ..., 1
    Ok(names
        .into_iter()
        .zip((1..=total).rev())
        .map(|(name, priority)| LoadOrderEntry::new(name, Priority::new(priority)))
        .collect())
}
