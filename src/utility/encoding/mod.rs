// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for files written by other tools.
//!
//! ```text
//! bytes --detect()--> BOM?  yes --> UTF-8 / UTF-16 LE / UTF-16 BE
//!                       no  --> valid UTF-8? --> UTF-8
//!                                        no  --> Windows-1252
//! ```
//!
//! Mod Organizer writes `modlist.txt` as UTF-8, spreadsheet exports of the
//! CSV listing are often UTF-8 with BOM or Windows-1252, and `ModInfo.xml`
//! files come from any editor. Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use std::borrow::Cow;

/// Detected encoding of a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 without BOM
    #[default]
    Utf8,
    /// UTF-8 with a leading BOM
    Utf8Bom,
    /// UTF-16 Little Endian (BOM required)
    Utf16Le,
    /// UTF-16 Big Endian (BOM required)
    Utf16Be,
    /// Legacy Windows code page 1252 (fallback for invalid UTF-8)
    Windows1252,
}

impl Encoding {
    /// Returns the display name of this encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf8Bom => "UTF-8 (BOM)",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Windows1252 => "windows-1252",
        }
    }
}

/// Detects the encoding of `bytes`.
///
/// A byte order mark always wins. Without one, the content is UTF-8 if it
/// validates and Windows-1252 otherwise.
#[must_use]
pub fn detect(bytes: &[u8]) -> Encoding {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((enc, _)) if enc == UTF_8 => Encoding::Utf8Bom,
        Some((enc, _)) if enc == UTF_16LE => Encoding::Utf16Le,
        Some((enc, _)) if enc == UTF_16BE => Encoding::Utf16Be,
        _ if std::str::from_utf8(bytes).is_ok() => Encoding::Utf8,
        _ => Encoding::Windows1252,
    }
}

/// Converts file bytes to UTF-8, stripping any BOM.
///
/// # Example
/// ```
/// use smoot::utility::encoding::decode;
///
/// assert_eq!(decode(b"\xEF\xBB\xBF1,ModA"), "1,ModA");
/// assert_eq!(decode(b"caf\xe9"), "café");
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    decode_as(detect(bytes), bytes)
}

/// Converts bytes in a known encoding to UTF-8, stripping any BOM.
#[must_use]
pub fn decode_as(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Utf8Bom => {
            String::from_utf8_lossy(bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes))
        }
        Encoding::Utf16Le => UTF_16LE.decode_with_bom_removal(bytes).0,
        Encoding::Utf16Be => UTF_16BE.decode_with_bom_removal(bytes).0,
        Encoding::Windows1252 => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

#[cfg(test)]
mod tests;
