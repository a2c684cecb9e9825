// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::parse::parse_descriptor;
use super::{ModInfo, ModInfos, ScanOptions, is_descriptor_file_name, scan};
use crate::error::ScanError;
use crate::utility::fs::walk::WalkOptions;
use std::path::Path;
use tempfile::TempDir;

const MODINFO_V2: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<xml>
    <Name value="BetterBarter" />
    <DisplayName value="Better Barter" />
    <Version value="2.1.0" />
    <Description value="Traders pay &amp; charge fairly" />
    <Author value="someone" />
    <Website value="https://example.invalid" />
</xml>
"#;

const MODINFO_V1: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<xml>
    <ModInfo>
        <Name value="OldSchool" />
        <Version value="0.9" />
    </ModInfo>
</xml>
"#;

fn write_mod(root: &Path, dir: &str, file_name: &str, name: &str) {
    let dir = root.join(dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(file_name),
        format!("<xml><Name value=\"{name}\" /></xml>"),
    )
    .unwrap();
}

fn info(name: &str, directory: &str) -> ModInfo {
    ModInfo::builder()
        .with_name(name)
        .with_directory(directory)
        .with_file_name("ModInfo.xml")
        .build()
}

// =============================================================================
// Descriptor parsing
// =============================================================================

#[test]
fn test_parse_v2_descriptor() {
    let descriptor = parse_descriptor(MODINFO_V2).unwrap();

    assert_eq!(descriptor.name.as_deref(), Some("BetterBarter"));
    assert_eq!(descriptor.display_name.as_deref(), Some("Better Barter"));
    assert_eq!(descriptor.version.as_deref(), Some("2.1.0"));
    assert_eq!(
        descriptor.description.as_deref(),
        Some("Traders pay & charge fairly")
    );
    assert_eq!(descriptor.author.as_deref(), Some("someone"));
    assert_eq!(descriptor.website.as_deref(), Some("https://example.invalid"));
}

#[test]
fn test_parse_v1_descriptor() {
    let descriptor = parse_descriptor(MODINFO_V1).unwrap();

    assert_eq!(descriptor.name.as_deref(), Some("OldSchool"));
    assert_eq!(descriptor.version.as_deref(), Some("0.9"));
    assert_eq!(descriptor.display_name, None);
}

#[test]
fn test_parse_first_name_wins() {
    let descriptor =
        parse_descriptor(r#"<xml><Name value="First"/><Name value="Second"/></xml>"#).unwrap();
    assert_eq!(descriptor.name.as_deref(), Some("First"));
}

#[test]
fn test_parse_missing_name() {
    let err = parse_descriptor(r#"<xml><Version value="1.0"/></xml>"#).unwrap_err();
    assert!(err.contains("missing"), "{err}");
}

#[test]
fn test_parse_empty_name() {
    let err = parse_descriptor(r#"<xml><Name value="  "/></xml>"#).unwrap_err();
    assert!(err.contains("empty"), "{err}");
}

#[test]
fn test_parse_not_xml() {
    assert!(parse_descriptor("").is_err());
    assert!(parse_descriptor("just some text").is_err());
    assert!(parse_descriptor("<xml><Name value=\"A\"></Wrong></xml>").is_err());
}

// =============================================================================
// Descriptor file names
// =============================================================================

#[test]
fn test_descriptor_file_names() {
    assert!(is_descriptor_file_name("ModInfo.xml"));
    assert!(is_descriptor_file_name("modinfo.xml"));
    assert!(is_descriptor_file_name("0007-ModInfo.xml"));
    assert!(is_descriptor_file_name("12345-ModInfo.xml"));
    assert!(!is_descriptor_file_name("ModInfo.xml.bak"));
    assert!(!is_descriptor_file_name("Localization.xml"));
    assert!(!is_descriptor_file_name("07-ModInfo.xml"));
}

// =============================================================================
// ModInfos lookups
// =============================================================================

#[test]
fn test_find_by_dir_name_first_wins() {
    let infos: ModInfos = [
        info("A", "/mods/pack1/Shared"),
        info("B", "/mods/pack2/Shared"),
    ]
    .into_iter()
    .collect();

    assert_eq!(infos.find_by_dir_name("Shared").unwrap().name(), "A");
    assert_eq!(infos.duplicates().len(), 1);
    assert_eq!(infos.duplicates()[0].dir_name, "Shared");
    assert_eq!(
        infos.duplicates()[0].shadowed,
        Path::new("/mods/pack2/Shared")
    );
}

#[test]
fn test_get_by_name_later_shadows() {
    let infos: ModInfos = [info("Same", "/mods/One"), info("Same", "/mods/Two")]
        .into_iter()
        .collect();

    assert_eq!(infos.len(), 2);
    assert_eq!(
        infos.get("Same").unwrap().directory(),
        Path::new("/mods/Two")
    );
    assert!(infos.get("same").is_none());
}

#[test]
fn test_lookup_is_exact() {
    let infos: ModInfos = [info("Declared", "/mods/FolderName")].into_iter().collect();

    assert!(infos.find_by_dir_name("FolderName").is_some());
    assert!(infos.find_by_dir_name("foldername").is_none());
    assert!(infos.find_by_dir_name("Folder").is_none());
    assert!(infos.find_by_dir_name("Declared").is_none());
}

// =============================================================================
// Scanning
// =============================================================================

#[test]
fn test_scan_finds_one_record_per_descriptor() {
    let temp = TempDir::new().unwrap();
    write_mod(temp.path(), "ModA", "ModInfo.xml", "Alpha");
    write_mod(temp.path(), "nested/deeper/ModB", "modinfo.xml", "Beta");
    write_mod(temp.path(), "ModC", "0003-ModInfo.xml", "Gamma");
    std::fs::create_dir(temp.path().join("NotAMod")).unwrap();
    std::fs::write(temp.path().join("NotAMod/readme.txt"), "hi").unwrap();

    let infos = scan(temp.path(), &ScanOptions::default()).unwrap();

    let found: Vec<(&str, &str, &str)> = infos
        .iter()
        .map(|m| (m.dir_name().unwrap(), m.name(), m.file_name()))
        .collect();
    insta::assert_debug_snapshot!(found, @r#"
    [
        (
            "ModA",
            "Alpha",
            "ModInfo.xml",
        ),
        (
            "ModC",
            "Gamma",
            "0003-ModInfo.xml",
        ),
        (
            "ModB",
            "Beta",
            "modinfo.xml",
        ),
    ]
    "#);
    assert!(infos.iter().all(|m| m.directory().is_absolute()));
}

#[test]
fn test_scan_empty_tree() {
    let temp = TempDir::new().unwrap();
    let infos = scan(temp.path(), &ScanOptions::default()).unwrap();
    assert!(infos.is_empty());
}

#[test]
fn test_scan_missing_root() {
    let err = scan("/nonexistent/smoot/mods", &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }));
}

#[test]
fn test_scan_root_is_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("modlist.txt");
    std::fs::write(&file, "+ModA").unwrap();

    let err = scan(&file, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory { .. }));
}

#[test]
fn test_scan_strict_fails_on_malformed() {
    let temp = TempDir::new().unwrap();
    write_mod(temp.path(), "Good", "ModInfo.xml", "Good");
    std::fs::create_dir(temp.path().join("Bad")).unwrap();
    std::fs::write(temp.path().join("Bad/ModInfo.xml"), "<xml><Version value=\"1\"/></xml>")
        .unwrap();

    let err = scan(temp.path(), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::MalformedMetadata { .. }));
}

#[test]
fn test_scan_lenient_skips_malformed() {
    let temp = TempDir::new().unwrap();
    write_mod(temp.path(), "Good", "ModInfo.xml", "Good");
    std::fs::create_dir(temp.path().join("Bad")).unwrap();
    std::fs::write(temp.path().join("Bad/ModInfo.xml"), "not xml at all").unwrap();

    let options = ScanOptions::builder().with_strict(false).build();
    let infos = scan(temp.path(), &options).unwrap();

    assert_eq!(infos.len(), 1);
    assert_eq!(infos.skipped().len(), 1);
    assert!(infos.skipped()[0].path.ends_with("Bad/ModInfo.xml"));
}

#[test]
fn test_scan_second_descriptor_in_folder_is_malformed() {
    let temp = TempDir::new().unwrap();
    write_mod(temp.path(), "ModA", "0001-ModInfo.xml", "A");
    write_mod(temp.path(), "ModA", "ModInfo.xml", "A");

    let err = scan(temp.path(), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::MalformedMetadata { .. }));

    let options = ScanOptions::builder().with_strict(false).build();
    let infos = scan(temp.path(), &options).unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos.iter().next().unwrap().file_name(), "0001-ModInfo.xml");
    assert_eq!(infos.skipped().len(), 1);
}

#[test]
fn test_scan_lenient_malformed_does_not_claim_folder() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("ModA")).unwrap();
    std::fs::write(temp.path().join("ModA/0001-ModInfo.xml"), "<xml><Name").unwrap();
    write_mod(temp.path(), "ModA", "ModInfo.xml", "A");

    let options = ScanOptions::builder().with_strict(false).build();
    let infos = scan(temp.path(), &options).unwrap();

    assert_eq!(infos.len(), 1);
    assert_eq!(infos.find_by_dir_name("ModA").unwrap().file_name(), "ModInfo.xml");
    assert_eq!(infos.skipped().len(), 1);
    assert!(infos.skipped()[0].path.ends_with("ModA/0001-ModInfo.xml"));
}

#[test]
fn test_scan_finds_wide_priority_prefix() {
    let temp = TempDir::new().unwrap();
    write_mod(temp.path(), "ModA", "12345-ModInfo.xml", "A");

    let infos = scan(temp.path(), &ScanOptions::default()).unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos.iter().next().unwrap().file_name(), "12345-ModInfo.xml");
}

#[cfg(unix)]
#[test]
fn test_scan_walk_errors_fail_strict_scan() {
    let temp = TempDir::new().unwrap();
    write_mod(temp.path(), "ModA", "ModInfo.xml", "A");
    std::os::unix::fs::symlink(temp.path(), temp.path().join("ModA/loop")).unwrap();

    let walk = WalkOptions::builder().with_follow_links(true).build();

    let strict = ScanOptions::builder().with_walk(walk.clone()).build();
    let err = scan(temp.path(), &strict).unwrap_err();
    assert!(matches!(err, ScanError::Walk { .. }), "{err}");

    let lenient = ScanOptions::builder()
        .with_strict(false)
        .with_walk(walk)
        .build();
    let infos = scan(temp.path(), &lenient).unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos.walk_errors().len(), 1);
}

#[test]
fn test_scan_decodes_utf8_bom() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("Bom");
    std::fs::create_dir(&dir).unwrap();
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(MODINFO_V2.as_bytes());
    std::fs::write(dir.join("ModInfo.xml"), bytes).unwrap();

    let infos = scan(temp.path(), &ScanOptions::default()).unwrap();
    assert_eq!(infos.get("BetterBarter").unwrap().dir_name(), Some("Bom"));
}
