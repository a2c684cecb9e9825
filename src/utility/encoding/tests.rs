// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, decode, decode_as, detect};

#[test]
fn test_utf8_passthrough() {
    let input = "+Änderungen\n+Hello, 世界!";
    assert_eq!(detect(input.as_bytes()), Encoding::Utf8);
    insta::assert_snapshot!(decode(input.as_bytes()), @r"
    +Änderungen
    +Hello, 世界!
    ");
}

#[test]
fn test_utf8_bom_is_stripped() {
    let input = b"\xEF\xBB\xBF#Priority,#Mod_Name";
    assert_eq!(detect(input), Encoding::Utf8Bom);
    assert_eq!(decode(input), "#Priority,#Mod_Name");
}

#[test]
fn test_windows_1252_fallback() {
    // "café" in Windows-1252: 0x63 0x61 0x66 0xe9
    let input = b"caf\xe9";
    assert_eq!(detect(input), Encoding::Windows1252);
    assert_eq!(decode(input), "café");
}

#[test]
fn test_utf16_le_with_bom() {
    // BOM + "Hi" in UTF-16 LE
    let input = b"\xFF\xFEH\x00i\x00";
    assert_eq!(detect(input), Encoding::Utf16Le);
    assert_eq!(decode(input), "Hi");
}

#[test]
fn test_utf16_be_with_bom() {
    let input = b"\xFE\xFF\x00H\x00i";
    assert_eq!(detect(input), Encoding::Utf16Be);
    assert_eq!(decode(input), "Hi");
}

#[test]
fn test_decode_as_lossy_utf8() {
    assert_eq!(decode_as(Encoding::Utf8, b"ok\xff"), "ok\u{FFFD}");
}

#[test]
fn test_encoding_names() {
    insta::assert_debug_snapshot!(
        [Encoding::Utf8, Encoding::Utf16Le, Encoding::Windows1252].map(Encoding::name),
        @r#"
    [
        "UTF-8",
        "UTF-16LE",
        "windows-1252",
    ]
    "#
    );
}
