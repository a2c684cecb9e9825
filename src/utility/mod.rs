// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   detect()  BOM / UTF-8 / Windows-1252 sniffing
//!   decode()  file bytes --> UTF-8
//! fs
//!   walk:  walk(), find_files_named(), WalkOptions
//! ```

pub mod encoding;
pub mod fs;
