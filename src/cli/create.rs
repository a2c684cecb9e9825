// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Create command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `create` command.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// The directory to scan for ModInfo.xml files.
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: PathBuf,

    /// The file to write the mod list to (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip malformed ModInfo.xml files instead of stopping.
    #[arg(long)]
    pub lenient: bool,
}
