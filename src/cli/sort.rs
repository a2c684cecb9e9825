// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sort command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `sort` command.
#[derive(Debug, Clone, Args)]
pub struct SortArgs {
    /// The directory to be sorted.
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: PathBuf,

    /// The modorder file to read for load order (.csv or MO2 modlist.txt).
    #[arg(short = 'm', long = "modorder", value_name = "FILE")]
    pub modorder: PathBuf,

    /// Write the full result of the run as JSON to FILE.
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Skip malformed ModInfo.xml files instead of stopping.
    #[arg(long)]
    pub lenient: bool,
}
