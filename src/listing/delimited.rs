// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `priority,name` listings.
//!
//! ```text
//! #Priority,#Mod_Name     <- header, skipped once
//! 0001,ModA
//! 0002,ModB
//! ```

use csv::{ReaderBuilder, Trim};

use super::LoadOrderEntry;
use crate::error::ListingError;
use crate::priority::Priority;

/// Second column of the header record.
pub const HEADER_SENTINEL: &str = "#Mod_Name";

pub(super) fn parse(text: &str) -> Result<Vec<LoadOrderEntry>, ListingError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    let mut header_seen = false;

    for (index, record) in reader.records().enumerate() {
        let number = index + 1;
        let record = record.map_err(|e| ListingError::malformed(number, e.to_string()))?;

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != 2 {
            return Err(ListingError::malformed(
                number,
                format!("expected 2 fields, found {}", record.len()),
            ));
        }

        let (priority, name) = (&record[0], &record[1]);

        if !header_seen && name == HEADER_SENTINEL {
            header_seen = true;
            continue;
        }

        let priority: Priority = priority.parse().map_err(|e| {
            ListingError::malformed(number, format!("invalid priority '{priority}': {e}"))
        })?;
        if name.is_empty() {
            return Err(ListingError::malformed(number, "empty mod name"));
        }

        entries.push(LoadOrderEntry::new(name, priority));
    }

    Ok(entries)
}
