// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load order reconciliation.
//!
//! # Pipeline
//!
//! ```text
//! SortRequest
//!    |
//!    +--> modinfo::scan(directory) ----+      fatal: ScanError
//!    |                                 |
//!    +--> listing::read(listing) ------+      fatal: ListingError
//!                                      v
//!                              match_entries()     unmatched --> warning
//!                                      |
//!                                      v
//!                           RenameOperation::plan
//!                                      |
//!                                      v
//!                              apply(dry_run)      failed --> collected
//!                                      |
//!                                      v
//!                                 SortReport
//! ```
//!
//! Path and format problems stop the run before anything is renamed. Missing
//! mods and failed renames are recorded in the report and the run goes on.

mod matcher;
mod rename;


use bon::Builder;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{RenameError, ScanError, SmootError};
use crate::listing::{self, LineFilter, LoadOrder};
use crate::modinfo::{self, ModInfos, ScanOptions};

pub use matcher::{MatchResult, match_entries};
pub use rename::{RenameOperation, RenameOutcome};

/// Inputs of one sort run.
#[derive(Debug, Clone, Builder)]
pub struct SortRequest {
    /// Root of the mods tree
    #[builder(setters(name = with_directory), into)]
    directory: PathBuf,
    /// Load order listing file
    #[builder(setters(name = with_listing), into)]
    listing: PathBuf,
    /// Report renames without performing them
    #[builder(setters(name = with_dry_run), default)]
    dry_run: bool,
    #[builder(setters(name = with_scan), default)]
    scan: ScanOptions,
    #[builder(setters(name = with_filter), default)]
    filter: LineFilter,
}

impl SortRequest {
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn listing(&self) -> &Path {
        &self.listing
    }

    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// One rename attempt and how it ended.
#[derive(Debug, Serialize)]
pub struct RenameRecord {
    #[serde(flatten)]
    pub operation: RenameOperation,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<RenameOutcome, RenameError>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeView {
    Planned,
    Renamed,
    AlreadyNamed,
    Failed { error: String },
}

fn serialize_outcome<S: Serializer>(
    outcome: &Result<RenameOutcome, RenameError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let view = match outcome {
        Ok(RenameOutcome::Planned) => OutcomeView::Planned,
        Ok(RenameOutcome::Renamed) => OutcomeView::Renamed,
        Ok(RenameOutcome::AlreadyNamed) => OutcomeView::AlreadyNamed,
        Err(e) => OutcomeView::Failed {
            error: e.to_string(),
        },
    };
    view.serialize(serializer)
}

/// Counts over a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    pub mods: usize,
    pub entries: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub renamed: usize,
    pub already_named: usize,
    pub planned: usize,
    pub failed: usize,
}

/// Everything a sort run found and did.
#[derive(Debug, Serialize)]
pub struct SortReport {
    pub dry_run: bool,
    pub mods: ModInfos,
    pub load_order: LoadOrder,
    pub matches: Vec<MatchResult>,
    pub renames: Vec<RenameRecord>,
    pub summary: SortSummary,
}

impl SortReport {
    /// Entries that named no folder under the mods root.
    pub fn unmatched(&self) -> impl Iterator<Item = &MatchResult> {
        self.matches.iter().filter(|m| !m.is_matched())
    }

    /// Rename attempts that returned an error.
    pub fn failures(&self) -> impl Iterator<Item = (&RenameOperation, &RenameError)> {
        self.renames
            .iter()
            .filter_map(|r| r.outcome.as_ref().err().map(|e| (&r.operation, e)))
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Scans, reads, matches and renames.
///
/// # Errors
///
/// - [`ScanError`] when the mods tree is missing, malformed (strict scans)
///   or holds no mods at all.
/// - [`crate::error::ListingError`] when the listing is missing, malformed,
///   empty or in an unsupported format.
///
/// # Example
/// ```no_run
/// use smoot::sort::{SortRequest, run_sort};
///
/// let request = SortRequest::builder()
///     .with_directory("/games/7DaysToDie/Mods")
///     .with_listing("modlist.txt")
///     .with_dry_run(true)
///     .build();
/// let report = run_sort(&request)?;
/// println!("{} planned", report.summary.planned);
/// # Ok::<(), smoot::error::SmootError>(())
/// ```
pub fn run_sort(request: &SortRequest) -> Result<SortReport, SmootError> {
    let mods = modinfo::scan(&request.directory, &request.scan)?;
    if mods.is_empty() {
        return Err(ScanError::NoMods {
            path: request.directory.clone(),
        }
        .into());
    }

    let load_order = listing::read(&request.listing, request.filter)?;
    let matches = match_entries(&mods, &load_order);
    let renames = apply_matches(&matches, request.dry_run);

    let mut summary = SortSummary {
        mods: mods.len(),
        entries: load_order.len(),
        ..SortSummary::default()
    };
    for m in &matches {
        if m.is_matched() {
            summary.matched += 1;
        } else {
            summary.unmatched += 1;
        }
    }
    for record in &renames {
        match record.outcome {
            Ok(RenameOutcome::Renamed) => summary.renamed += 1,
            Ok(RenameOutcome::AlreadyNamed) => summary.already_named += 1,
            Ok(RenameOutcome::Planned) => summary.planned += 1,
            Err(_) => summary.failed += 1,
        }
    }

    Ok(SortReport {
        dry_run: request.dry_run,
        mods,
        load_order,
        matches,
        renames,
        summary,
    })
}

/// Plans and applies one rename per matched entry, in listing order.
///
/// A folder matched again is planned from the name its previous operation
/// produced.
fn apply_matches(matches: &[MatchResult], dry_run: bool) -> Vec<RenameRecord> {
    let mut current: HashMap<PathBuf, String> = HashMap::new();
    let mut records = Vec::new();

    for m in matches {
        let Some(info) = m.matched() else {
            continue;
        };
        let operation = match current.get(info.directory()) {
            Some(file_name) => RenameOperation::new(info.directory(), file_name, m.entry().priority()),
            None => RenameOperation::plan(info, m.entry().priority()),
        };

        let outcome = operation.apply(dry_run);
        if outcome.is_ok()
            && let Some(file_name) = operation.destination_file_name()
        {
            current.insert(info.directory().to_path_buf(), file_name.to_string());
        }

        records.push(RenameRecord { operation, outcome });
    }

    records
}
