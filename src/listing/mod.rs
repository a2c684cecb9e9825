// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load order listings exported by Mod Organizer 2.
//!
//! # Format Dispatch
//!
//! ```text
//! read(path) --ListingFormat::from_path--+
//!                                        |
//!   .csv   Csv      priority,name      --> delimited::parse
//!   .txt   Text     +Name / -Name      --> modlist::parse
//!   .json  Json     not yet implemented --> UnsupportedFormat
//!   .xml   Xml      not yet implemented --> UnsupportedFormat
//!   *      Unknown                      --> UnknownFormat
//! ```
//!
//! # Priorities
//!
//! ```text
//! CSV:   explicit, column 1
//! TXT:   positional, N surviving lines --> N, N-1, ..., 1 (top to bottom)
//! ```
//!
//! Entries keep the order of the source file in both formats.

mod delimited;
mod modlist;


use bitflags::bitflags;
use serde::Serialize;
use std::path::Path;

use crate::error::ListingError;
use crate::priority::Priority;
use crate::utility::encoding;

pub use delimited::HEADER_SENTINEL;
pub use modlist::{BRIDGE_PLUGIN_NAME, SEPARATOR_SUFFIX};

/// One line of the desired load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadOrderEntry {
    /// Mod Organizer mod name, matched against mod folder names.
    name: String,
    priority: Priority,
}

impl LoadOrderEntry {
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Parsed listing, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LoadOrder {
    entries: Vec<LoadOrderEntry>,
}

impl LoadOrder {
    #[must_use]
    pub fn entries(&self) -> &[LoadOrderEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoadOrderEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn non_empty(entries: Vec<LoadOrderEntry>) -> Result<Self, ListingError> {
        if entries.is_empty() {
            Err(ListingError::NoEntries)
        } else {
            Ok(Self { entries })
        }
    }
}

impl<'a> IntoIterator for &'a LoadOrder {
    type Item = &'a LoadOrderEntry;
    type IntoIter = std::slice::Iter<'a, LoadOrderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<LoadOrderEntry> for LoadOrder {
    fn from_iter<I: IntoIterator<Item = LoadOrderEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

bitflags! {
    /// Lines dropped from `modlist.txt` even when marked enabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFilter: u8 {
        /// Mod Organizer separators (`..._separator`), sometimes left checked.
        const SKIP_SEPARATORS = 0x01;

        /// The 7D2D MO2 plugin that bridges MO2 and the game's Mods folder.
        const SKIP_BRIDGE_PLUGIN = 0x02;
    }
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Listing format, selected by file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFormat {
    /// `priority,name` records.
    Csv,
    /// MO2 `modlist.txt`.
    Text,
    /// Recognized, no reader yet.
    Json,
    /// Recognized, no reader yet.
    Xml,
    /// Anything else; holds the extension with its leading dot, or "".
    Unknown(String),
}

impl ListingFormat {
    /// Picks the format from the extension of `path` (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().map(|e| e.to_string_lossy()) else {
            return Self::Unknown(String::new());
        };
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Self::Csv,
            "txt" => Self::Text,
            "json" => Self::Json,
            "xml" => Self::Xml,
            _ => Self::Unknown(format!(".{ext}")),
        }
    }
}

/// Parses CSV listing text.
///
/// # Errors
///
/// [`ListingError::Malformed`] for a bad record, [`ListingError::NoEntries`]
/// when no data record remains.
pub fn parse_csv(text: &str) -> Result<LoadOrder, ListingError> {
    LoadOrder::non_empty(delimited::parse(text)?)
}

/// Parses `modlist.txt` text, assigning positional priorities.
///
/// # Errors
///
/// [`ListingError::NoEntries`] when no enabled line survives `filter`.
pub fn parse_text(text: &str, filter: LineFilter) -> Result<LoadOrder, ListingError> {
    LoadOrder::non_empty(modlist::parse(text, filter)?)
}

/// Reads the listing at `path`, dispatching on its extension.
///
/// # Errors
///
/// - [`ListingError::NotFound`] if `path` does not exist.
/// - [`ListingError::UnsupportedFormat`] for `.json` / `.xml`.
/// - [`ListingError::UnknownFormat`] for any other extension.
/// - Parse errors from [`parse_csv`] / [`parse_text`].
///
/// # Example
/// ```no_run
/// use smoot::listing::{read, LineFilter};
///
/// let order = read("modlist.txt", LineFilter::default())?;
/// for entry in &order {
///     println!("{} {}", entry.priority(), entry.name());
/// }
/// # Ok::<(), smoot::error::ListingError>(())
/// ```
pub fn read<P: AsRef<Path>>(path: P, filter: LineFilter) -> Result<LoadOrder, ListingError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ListingError::NotFound {
            path: path.to_path_buf(),
        });
    }

    match ListingFormat::from_path(path) {
        ListingFormat::Csv => parse_csv(&read_text(path)?),
        ListingFormat::Text => parse_text(&read_text(path)?, filter),
        ListingFormat::Json => Err(ListingError::UnsupportedFormat { format: "JSON" }),
        ListingFormat::Xml => Err(ListingError::UnsupportedFormat { format: "XML" }),
        ListingFormat::Unknown(extension) => Err(ListingError::UnknownFormat { extension }),
    }
}

fn read_text(path: &Path) -> Result<String, ListingError> {
    let bytes = std::fs::read(path).map_err(|source| ListingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encoding::decode(&bytes).into_owned())
}
