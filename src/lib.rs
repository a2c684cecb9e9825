// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            sort / create / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                          sort
//!                match + rename, SortReport
//!                 |                    |
//!                 v                    v
//!              modinfo              listing
//!          ModInfo.xml scan     CSV / modlist.txt
//!                 |                    |
//!                 +------ priority ----+
//!
//!   +------------------------------------------+
//!   |  foundation   error, logging, utility    |
//!   |               (walk, encoding)           |
//!   +------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod modinfo;
pub mod priority;
pub mod sort;
pub mod utility;
