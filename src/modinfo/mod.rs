// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod discovery from `ModInfo.xml` descriptors.
//!
//! ```text
//! scan(root, &ScanOptions)
//!    |
//!    v
//! walk (sorted) --> *ModInfo.xml --> decode --> quick-xml --> ModInfo
//!                   NNNN-ModInfo.xml                            |
//!                                                               v
//!                                                           ModInfos
//!                                       get(name)             <- Name field, last wins
//!                                       find_by_dir_name(dir) <- folder name, first wins
//!                                       skipped(), duplicates()
//! ```
//!
//! A mod's identity for load ordering is the name of the folder holding its
//! descriptor (the Mod Organizer mod name), not the `Name` field.

mod parse;

#[cfg(test)]
mod tests;

use bon::Builder;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::priority;
use crate::utility::encoding;
use crate::utility::fs::walk::{WalkOptions, find_files_named};

/// File name of a 7 Days to Die mod descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "ModInfo.xml";

/// Returns `true` for `ModInfo.xml` in any letter case, with or without a
/// priority prefix left by an earlier sort.
#[must_use]
pub fn is_descriptor_file_name(name: &str) -> bool {
    priority::strip_prefix(name).eq_ignore_ascii_case(DESCRIPTOR_FILE_NAME)
}

/// One discovered mod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct ModInfo {
    /// Value of the descriptor's `Name` element.
    #[builder(setters(name = with_name), into)]
    name: String,
    #[builder(setters(name = with_display_name), into)]
    display_name: Option<String>,
    #[builder(setters(name = with_version), into)]
    version: Option<String>,
    #[builder(setters(name = with_description), into)]
    description: Option<String>,
    #[builder(setters(name = with_author), into)]
    author: Option<String>,
    #[builder(setters(name = with_website), into)]
    website: Option<String>,
    /// Absolute path of the folder holding the descriptor.
    #[builder(setters(name = with_directory), into)]
    directory: PathBuf,
    /// Descriptor file name as found on disk.
    #[builder(setters(name = with_file_name), into)]
    file_name: String,
}

impl ModInfo {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the descriptor file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Name of the containing folder, used to match load order entries.
    #[must_use]
    pub fn dir_name(&self) -> Option<&str> {
        self.directory.file_name().and_then(OsStr::to_str)
    }
}

/// A descriptor left out of a lenient scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDescriptor {
    pub path: PathBuf,
    pub reason: String,
}

/// Two mods living in folders with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateDir {
    pub dir_name: String,
    /// Folder that answers lookups for `dir_name`.
    pub kept: PathBuf,
    pub shadowed: PathBuf,
}

/// Mods found by a scan, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModInfos {
    mods: Vec<ModInfo>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
    #[serde(skip)]
    by_dir_name: HashMap<String, usize>,
    duplicates: Vec<DuplicateDir>,
    skipped: Vec<SkippedDescriptor>,
    walk_errors: Vec<String>,
}

impl ModInfos {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mod, updating both lookup indexes.
    pub fn push(&mut self, info: ModInfo) {
        let index = self.mods.len();
        self.by_name.insert(info.name.clone(), index);

        if let Some(dir_name) = info.dir_name() {
            if let Some(&kept) = self.by_dir_name.get(dir_name) {
                self.duplicates.push(DuplicateDir {
                    dir_name: dir_name.to_string(),
                    kept: self.mods[kept].directory.clone(),
                    shadowed: info.directory.clone(),
                });
            } else {
                self.by_dir_name.insert(dir_name.to_string(), index);
            }
        }

        self.mods.push(info);
    }

    /// Looks up a mod by its `Name` field (exact match).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModInfo> {
        self.by_name.get(name).map(|&i| &self.mods[i])
    }

    /// Looks up a mod by the name of its folder (exact match).
    #[must_use]
    pub fn find_by_dir_name(&self, dir_name: &str) -> Option<&ModInfo> {
        self.by_dir_name.get(dir_name).map(|&i| &self.mods[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModInfo> {
        self.mods.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    /// Descriptors left out because they could not be parsed.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedDescriptor] {
        &self.skipped
    }

    /// Folder names seen more than once.
    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateDir] {
        &self.duplicates
    }

    /// Entries the walk could not read.
    #[must_use]
    pub fn walk_errors(&self) -> &[String] {
        &self.walk_errors
    }
}

impl<'a> IntoIterator for &'a ModInfos {
    type Item = &'a ModInfo;
    type IntoIter = std::slice::Iter<'a, ModInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.mods.iter()
    }
}

impl FromIterator<ModInfo> for ModInfos {
    fn from_iter<I: IntoIterator<Item = ModInfo>>(iter: I) -> Self {
        let mut infos = Self::new();
        for info in iter {
            infos.push(info);
        }
        infos
    }
}

/// Options for [`scan`].
#[derive(Debug, Clone, Builder)]
pub struct ScanOptions {
    /// Fail on the first malformed descriptor instead of skipping it
    #[builder(setters(name = with_strict), default = true)]
    strict: bool,
    /// Directory traversal options
    #[builder(setters(name = with_walk), default = WalkOptions::for_mods_dir())]
    walk: WalkOptions,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanOptions {
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub const fn walk(&self) -> &WalkOptions {
        &self.walk
    }
}

/// Recursively discovers every mod descriptor under `root`.
///
/// Descriptors are visited in sorted path order, so repeated scans of an
/// unchanged tree produce the same sequence. An empty result is not an
/// error here; callers decide whether zero mods is acceptable.
///
/// # Errors
///
/// - [`ScanError::NotFound`] / [`ScanError::NotADirectory`] for a bad root.
/// - [`ScanError::Walk`] if the traversal cannot start, or, when the scan is
///   strict, if any part of the tree could not be read.
/// - [`ScanError::MalformedMetadata`] for the first unreadable descriptor,
///   when the scan is strict.
///
/// # Example
/// ```no_run
/// use smoot::modinfo::{scan, ScanOptions};
///
/// let mods = scan("/games/7DaysToDie/Mods", &ScanOptions::default())?;
/// for info in &mods {
///     println!("{} ({})", info.name(), info.directory().display());
/// }
/// # Ok::<(), smoot::error::ScanError>(())
/// ```
pub fn scan<P: AsRef<Path>>(root: P, options: &ScanOptions) -> Result<ModInfos, ScanError> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ScanError::NotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let root = std::path::absolute(root).map_err(|e| ScanError::Walk {
        path: root.to_path_buf(),
        message: e.to_string(),
    })?;

    let walked =
        find_files_named(&root, options.walk(), is_descriptor_file_name).map_err(|e| {
            ScanError::Walk {
                path: root.clone(),
                message: format!("{e:#}"),
            }
        })?;

    if options.strict()
        && let Some(message) = walked.errors().first()
    {
        return Err(ScanError::Walk {
            path: root,
            message: message.clone(),
        });
    }

    let mut infos = ModInfos::new();
    infos.walk_errors = walked.errors().to_vec();
    let mut seen_dirs = HashSet::new();

    for path in walked.files() {
        match read_descriptor(path, &mut seen_dirs) {
            Ok(info) => infos.push(info),
            Err(e) if options.strict() => return Err(e),
            Err(e) => infos.skipped.push(SkippedDescriptor {
                path: path.clone(),
                reason: match e {
                    ScanError::MalformedMetadata { message, .. } => message,
                    other => other.to_string(),
                },
            }),
        }
    }

    Ok(infos)
}

fn read_descriptor(path: &Path, seen_dirs: &mut HashSet<PathBuf>) -> Result<ModInfo, ScanError> {
    let (Some(directory), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(ScanError::malformed(path, "descriptor has no parent folder"));
    };
    let file_name = file_name
        .to_str()
        .ok_or_else(|| ScanError::malformed(path, "file name is not valid UTF-8"))?;

    if seen_dirs.contains(directory) {
        return Err(ScanError::malformed(
            path,
            "folder already contains another mod descriptor",
        ));
    }

    let bytes = std::fs::read(path).map_err(|e| ScanError::malformed(path, e.to_string()))?;
    let descriptor = parse::parse_descriptor(&encoding::decode(&bytes))
        .map_err(|message| ScanError::malformed(path, message))?;
    // only a readable descriptor claims its folder
    seen_dirs.insert(directory.to_path_buf());

    Ok(ModInfo {
        name: descriptor.name.unwrap_or_default(),
        display_name: descriptor.display_name,
        version: descriptor.version,
        description: descriptor.description,
        author: descriptor.author,
        website: descriptor.website,
        directory: directory.to_path_buf(),
        file_name: file_name.to_string(),
    })
}
