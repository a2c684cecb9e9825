// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load priorities and the file name prefix that encodes them.
//!
//! ```text
//! Priority(7)      --> "0007"
//! Priority(12345)  --> "12345"        (never truncated)
//!
//! "ModInfo.xml"       --apply_to(7)----->  "0007-ModInfo.xml"
//! "0042-ModInfo.xml"  --apply_to(7)----->  "0007-ModInfo.xml"
//! "12345-ModInfo.xml" --apply_to(7)----->  "0007-ModInfo.xml"
//! ```
//!
//! Lower values load earlier. Lexicographic order of the prefixed names
//! reproduces numeric order for priorities below 10000.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

/// A leading group of four or more digits followed by a hyphen.
static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{4,}-").expect("priority prefix pattern is valid"));

/// Load priority of a mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `file_name` with any existing prefix replaced by this priority.
    #[must_use]
    pub fn apply_to(self, file_name: &str) -> String {
        format!("{self}-{}", strip_prefix(file_name))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Priority {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Removes a leading `NNNN-` priority prefix (four or more digits), if present.
#[must_use]
pub fn strip_prefix(file_name: &str) -> &str {
    PREFIX
        .find(file_name)
        .map_or(file_name, |m| &file_name[m.end()..])
}
