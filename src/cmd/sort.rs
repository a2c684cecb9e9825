// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sort command implementation for smoot.
//!
//! ```text
//! SortArgs + Config --> SortRequest --> sort::run_sort --> SortReport
//!                                                             |
//!                             log transcript  <---------------+
//!                             --report FILE   <---------------+
//! ```
//!
//! | Level | Lines                                              |
//! |-------|----------------------------------------------------|
//! | INFO  | progress, planned renames (dry run), summary       |
//! | WARN  | missing mods, skipped descriptors, duplicate names |
//! | ERROR | failed renames                                     |
//! | DEBUG | performed and already-named renames                |
//! | TRACE | every match                                        |

use anyhow::Context;
use std::path::Path;
use tracing::{debug, error, info, trace, warn};

use crate::cli::sort::SortArgs;
use crate::cmd::report_scan_problems;
use crate::config::Config;
use crate::error::{FsError, Result};
use crate::sort::{RenameOutcome, SortReport, SortRequest, run_sort};

/// Main handler for the sort command.
///
/// # Errors
///
/// Returns an error if the mods directory or listing cannot be used, if the
/// report cannot be written, or if any rename failed.
pub fn run_sort_command(args: &SortArgs, config: &Config) -> Result<()> {
    let mut scan = config.scan.clone();
    if args.lenient {
        scan.strict = false;
    }

    let request = SortRequest::builder()
        .with_directory(&args.dir)
        .with_listing(&args.modorder)
        .with_dry_run(config.global.dry)
        .with_scan(scan.to_scan_options())
        .with_filter(config.listing.line_filter())
        .build();

    info!(
        directory = %args.dir.display(),
        modorder = %args.modorder.display(),
        dry_run = request.dry_run(),
        "Sorting mods"
    );

    let report = run_sort(&request)?;

    render_report(&report);

    if let Some(path) = &args.report {
        write_report(&report, path)?;
        info!(path = %path.display(), "Wrote sort report");
    }

    if report.has_failures() {
        anyhow::bail!(
            "{} of {} renames failed",
            report.summary.failed,
            report.renames.len()
        );
    }

    Ok(())
}

/// Logs the outcome of a run at the levels listed in the module docs.
pub fn render_report(report: &SortReport) {
    report_scan_problems(&report.mods);

    for m in &report.matches {
        let entry = m.entry();
        match m.matched() {
            Some(info) => trace!(
                name = entry.name(),
                priority = %entry.priority(),
                directory = %info.directory().display(),
                "Found mod"
            ),
            None => warn!(name = entry.name(), "Did NOT find mod, skipped"),
        }
    }

    for record in &report.renames {
        let op = &record.operation;
        let from = file_name(op.source());
        let to = file_name(op.destination());
        let dir = op
            .source()
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        match &record.outcome {
            Ok(RenameOutcome::Planned) => info!(%dir, from, to, "Would rename"),
            Ok(RenameOutcome::Renamed) => debug!(%dir, from, to, "Renamed"),
            Ok(RenameOutcome::AlreadyNamed) => debug!(%dir, name = from, "Already named"),
            Err(e) => error!(%dir, from, to, error = %e, "Rename failed"),
        }
    }

    let s = &report.summary;
    info!(
        mods = s.mods,
        entries = s.entries,
        matched = s.matched,
        unmatched = s.unmatched,
        renamed = s.renamed,
        already_named = s.already_named,
        planned = s.planned,
        failed = s.failed,
        "Sort finished"
    );
}

/// Writes `report` as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_report(report: &SortReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize sort report")?;
    std::fs::write(path, json).map_err(|e| FsError::from_io(path, e))?;
    Ok(())
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
