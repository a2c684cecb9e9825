// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  walk()               ignore::Walk, sorted by file name
//!        find_files_named()   file name predicate
//!        WalkOptions          max_depth, hidden, skip_dirs, exclude globs
//! ```

pub mod walk;
