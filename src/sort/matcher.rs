// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Joins load order entries to scanned mods by folder name.

use serde::Serialize;

use crate::listing::{LoadOrder, LoadOrderEntry};
use crate::modinfo::{ModInfo, ModInfos};

/// A load order entry and the mod it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    entry: LoadOrderEntry,
    #[serde(rename = "mod")]
    matched: Option<ModInfo>,
}

impl MatchResult {
    #[must_use]
    pub const fn entry(&self) -> &LoadOrderEntry {
        &self.entry
    }

    #[must_use]
    pub const fn matched(&self) -> Option<&ModInfo> {
        self.matched.as_ref()
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

/// Resolves every entry, in listing order.
///
/// An entry matches the mod whose folder name equals the entry name exactly.
/// The declared `Name` inside the descriptor plays no part.
#[must_use]
pub fn match_entries(mods: &ModInfos, order: &LoadOrder) -> Vec<MatchResult> {
    order
        .iter()
        .map(|entry| MatchResult {
            entry: entry.clone(),
            matched: mods.find_by_dir_name(entry.name()).cloned(),
        })
        .collect()
}
