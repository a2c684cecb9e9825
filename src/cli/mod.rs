// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for smoot using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! smoot [global options] <command>
//! sort   -d DIR -m MODORDER [--report FILE] [--lenient]
//! create -d DIR [-o FILE] [--lenient]
//! options
//! inis
//! version
//! ```

pub mod create;
pub mod global;
pub mod sort;

#[cfg(test)]
mod tests;

use crate::cli::create::CreateArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::sort::SortArgs;
use clap::{Parser, Subcommand};

/// Seven Days to Die Mod Order Optimization Tool
///
/// Renames `ModInfo.xml` files so the game loads mods in the order
/// exported from Mod Organizer 2.
#[derive(Debug, Parser)]
#[command(
    name = "smoot",
    author,
    version,
    about = "Seven Days to Die Mod Order Optimization Tool",
    long_about = "smoot Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  7 Days to Die loads mods in the order of their ModInfo.xml\n\
                  file names. `smoot sort -d Mods -m modlist.txt` prefixes each\n\
                  ModInfo.xml with the priority Mod Organizer 2 assigned to its\n\
                  folder. Use --dry to see the renames first.",
    after_help = "CONFIG FILES:\n\n\
                  smoot reads `smoot.toml` from the current directory if present.\n\
                  Additional files can be given with --config; later files override\n\
                  earlier ones. SMOOT_<SECTION>__<KEY> environment variables and\n\
                  command line flags override all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by smoot.
    Inis,

    /// Sorts the given mod directory based on the input list.
    Sort(SortArgs),

    /// Creates a load order file from the ModInfo.xml files found.
    Create(CreateArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
