// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::Path;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["smoot", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_sort() {
    let cli = Cli::try_parse_from([
        "smoot",
        "sort",
        "-d",
        "Mods",
        "-m",
        "modlist.txt",
        "--report",
        "report.json",
    ])
    .unwrap();

    let Some(Command::Sort(args)) = cli.command else {
        panic!("expected sort command");
    };
    assert_eq!(args.dir, Path::new("Mods"));
    assert_eq!(args.modorder, Path::new("modlist.txt"));
    assert_eq!(args.report.as_deref(), Some(Path::new("report.json")));
    assert!(!args.lenient);
}

#[test]
fn test_sort_requires_dir_and_modorder() {
    assert!(Cli::try_parse_from(["smoot", "sort", "-d", "Mods"]).is_err());
    assert!(Cli::try_parse_from(["smoot", "sort", "-m", "order.csv"]).is_err());
}

#[test]
fn test_parse_create() {
    let cli = Cli::try_parse_from(["smoot", "create", "--dir", "Mods", "-o", "out.txt"]).unwrap();

    let Some(Command::Create(args)) = cli.command else {
        panic!("expected create command");
    };
    assert_eq!(args.dir, Path::new("Mods"));
    assert_eq!(args.output.as_deref(), Some(Path::new("out.txt")));
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "smoot", "sort", "-d", "Mods", "-m", "order.csv", "--dryrun", "-vv", "--no-color",
    ])
    .unwrap();

    assert!(cli.global.dry);
    assert_eq!(cli.global.verbose, 2);
    assert!(cli.global.no_color);
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "smoot",
        "--dry",
        "-v",
        "--no-color",
        "--set",
        "scan.strict=false",
        "--log-file",
        "smoot.log",
        "options",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "scan.strict",
            "false",
        ),
        (
            "global.output_log_level",
            "4",
        ),
        (
            "global.file_log_level",
            "4",
        ),
        (
            "global.log_file",
            "smoot.log",
        ),
        (
            "global.dry",
            "true",
        ),
        (
            "global.color",
            "false",
        ),
    ]
    "#);
}

#[test]
fn test_log_level_wins_over_verbose() {
    let cli = Cli::try_parse_from(["smoot", "-vv", "-l", "2", "--file-log-level", "6", "inis"])
        .unwrap();

    assert_eq!(cli.global.console_level(), Some(2));
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&("global.output_log_level".into(), "2".into())));
    assert!(overrides.contains(&("global.file_log_level".into(), "6".into())));
}

#[test]
fn test_invalid_global_values() {
    assert!(Cli::try_parse_from(["smoot", "-l", "7", "options"]).is_err());
    assert!(Cli::try_parse_from(["smoot", "--set", "novalue", "options"]).is_err());
    assert!(Cli::try_parse_from(["smoot", "--set", "=1", "options"]).is_err());
}

#[test]
fn test_no_overrides_by_default() {
    let cli = Cli::try_parse_from(["smoot", "options"]).unwrap();
    assert!(cli.global.to_config_overrides().is_empty());
}
