// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Create command implementation for smoot.

use std::io::Write;
use tracing::info;

use crate::cli::create::CreateArgs;
use crate::cmd::report_scan_problems;
use crate::config::Config;
use crate::error::{FsError, Result, ScanError};
use crate::modinfo::{self, ModInfos};

/// Main handler for the create command.
///
/// Writes the `Name` of every discovered mod, one per line, to `--output`
/// or stdout. With `--dry` an output file is left untouched.
///
/// # Errors
///
/// Returns an error if the scan fails, finds no mods, or the output cannot be
/// written.
pub fn run_create_command(args: &CreateArgs, config: &Config) -> Result<()> {
    let mut scan = config.scan.clone();
    if args.lenient {
        scan.strict = false;
    }

    let mods = modinfo::scan(&args.dir, &scan.to_scan_options())?;
    report_scan_problems(&mods);

    if mods.is_empty() {
        return Err(ScanError::NoMods {
            path: args.dir.clone(),
        }
        .into());
    }

    match &args.output {
        Some(path) if config.global.dry => {
            info!(path = %path.display(), mods = mods.len(), "Dry run, not writing mod list");
        }
        Some(path) => {
            let mut file = std::fs::File::create(path).map_err(|e| FsError::from_io(path, e))?;
            write_mod_list(&mods, &mut file).map_err(|e| FsError::from_io(path, e))?;
            info!(path = %path.display(), mods = mods.len(), "Wrote mod list");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_mod_list(&mods, &mut stdout)?;
        }
    }

    Ok(())
}

/// Writes one `Name` per line, in scan order.
///
/// # Errors
///
/// Returns any error from `writer`.
pub fn write_mod_list<W: Write>(mods: &ModInfos, writer: &mut W) -> std::io::Result<()> {
    for info in mods {
        writeln!(writer, "{}", info.name())?;
    }
    writer.flush()
}
