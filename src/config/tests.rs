// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::listing::LineFilter;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(!config.global.dry);
    assert!(config.global.color);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.global.log_file.is_none());
    assert!(config.scan.strict);
    assert!(config.scan.exclude.is_empty());
    assert_eq!(config.listing.line_filter(), LineFilter::all());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
dry = true
output_log_level = 4
log_file = "logs/smoot.log"

[scan]
strict = false
exclude = ["Disabled/**"]

[listing]
skip_separators = false
"#;

    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/smoot.log")));
    assert!(!config.scan.strict);
    assert_eq!(config.scan.exclude, ["Disabled/**"]);
    assert_eq!(config.listing.line_filter(), LineFilter::SKIP_BRIDGE_PLUGIN);
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(
        "[global]\nlog_file = \"smoot.log\"\n[scan]\nmax_depth = 3\nexclude = [\"a/**\", \"b\"]",
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.color               = true
    global.dry                 = false
    global.file_log_level      = 5
    global.log_file            = smoot.log
    global.output_log_level    = 3
    listing.skip_bridge_plugin = true
    listing.skip_separators    = true
    scan.exclude               = a/**, b
    scan.follow_links          = false
    scan.include_hidden        = false
    scan.max_depth             = 3
    scan.strict                = true
    ");
}

#[test]
fn test_scan_config_to_options() {
    let config = Config::parse(
        r#"
[scan]
strict = false
follow_links = true
max_depth = 4
exclude = ["Backup/**"]
"#,
    )
    .unwrap();

    let options = config.scan.to_scan_options();
    assert!(!options.strict());
    assert!(options.walk().follow_links());
    assert_eq!(options.walk().max_depth(), Some(4));
    assert_eq!(options.walk().exclude(), ["Backup/**"]);
    assert!(options.walk().skip_dirs().iter().any(|d| d == ".git"));
}

#[test]
fn test_log_level_bounds() {
    assert!(Config::parse("[global]\noutput_log_level = 6").is_ok());
    assert!(Config::parse("[global]\noutput_log_level = 7").is_err());
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[scan]\nstrcit = false").is_err());
    assert!(Config::parse("[tasks]\nfoo = 1").is_err());
}

#[test]
fn test_invalid_exclude_glob() {
    let err = Config::parse("[scan]\nexclude = [\"Mods/[\"]").unwrap_err();
    assert!(err.to_string().contains("'exclude'"), "{err}");
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\n dry = true")
        .add_toml_file_optional("/nonexistent/smoot.toml")
        .add_toml_str("[scan]\n strict = false");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [string] <string>
    ");
}

#[test]
fn test_config_loader_add_toml_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[global]\ndry = true\ncolor = false").expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert!(config.global.dry);
    assert!(!config.global.color);
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/smoot.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    let result = ConfigLoader::new().add_toml_file(file.path()).build();
    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable names are unique to this test
    unsafe {
        std::env::set_var("SMOOTTEST_GLOBAL__DRY", "true");
        std::env::set_var("SMOOTTEST_SCAN__FOLLOW_LINKS", "true");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[global]\n dry = false")
        .with_env_prefix("SMOOTTEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("SMOOTTEST_GLOBAL__DRY");
        std::env::remove_var("SMOOTTEST_SCAN__FOLLOW_LINKS");
    }

    assert!(config.global.dry, "env var should override TOML value");
    assert!(config.scan.follow_links);
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\n dry = false")
        .set("global.dry", true)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert!(config.global.dry, "set override should take effect");
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[global]\ndry = false\ncolor = false\n\n[scan]\nstrict = false")
        .expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[global]\ndry = true")
        .build()
        .expect("build should succeed");

    assert!(config.global.dry, "string should override file");
    assert!(!config.global.color, "file value should persist");
    assert!(!config.scan.strict, "file value should persist");
}

#[test]
fn test_config_loader_build_deserialization_error() {
    let result = ConfigLoader::new()
        .add_toml_str("[global]\n dry = \"not a boolean\"")
        .build();

    let err_str = result.unwrap_err().to_string();
    assert!(
        err_str.contains("dry") || err_str.contains("invalid type"),
        "error should mention the problematic field: {err_str}"
    );
}

#[test]
fn test_from_file_missing() {
    let err = Config::from_file("/nonexistent/smoot.toml").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().expect("ConfigError");
    assert!(matches!(config_err, ConfigError::NotFound(_)));
}

#[test]
fn test_from_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[global\ndry = true").expect("failed to write");

    let err = Config::from_file(file.path()).unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().expect("ConfigError");
    assert!(matches!(config_err, ConfigError::ParseError { .. }));
    assert!(err.to_string().starts_with("failed to parse config file"));
}
