// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --dry, --dryrun   ← Report renames only
//! -v, -vv           ← More console output
//! --log-level N     ← Console verbosity (0-6), wins over -v
//! --file-log-level  ← File verbosity (defaults to console level)
//! --log-file FILE   ← Also log to FILE
//! --no-color        ← Plain console output
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > smoot.toml > defaults
//! ```

use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Run without performing any persistent operations.
    #[arg(long, visible_alias = "dryrun", global = true)]
    pub dry: bool,

    /// Verbose output (may be repeated).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Sets an option, such as 'scan.strict=false'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = ArgAction::Append,
        global = true, value_parser = parse_key_value
    )]
    pub options: Vec<(String, String)>,
}

impl GlobalOptions {
    /// Console level requested on the command line, if any.
    #[must_use]
    pub fn console_level(&self) -> Option<u8> {
        self.log_level.or_else(|| {
            (self.verbose > 0).then(|| LogLevel::from_verbosity(self.verbose).as_u8())
        })
    }

    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.console_level() {
            overrides.push(("global.output_log_level".into(), level.to_string()));
        }

        // file level follows the console level unless given
        if let Some(level) = self.file_log_level.or_else(|| self.console_level()) {
            overrides.push(("global.file_log_level".into(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string()));
        }

        if self.dry {
            overrides.push(("global.dry".into(), "true".into()));
        }

        if self.no_color {
            overrides.push(("global.color".into(), "false".into()));
        }

        overrides
    }
}

/// Parses a `KEY=VALUE` pair for `--set`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
