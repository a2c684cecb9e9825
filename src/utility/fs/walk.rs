// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use wax::{Glob, Program};

/// Options for directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
    /// Skip entries whose path relative to the root matches one of these globs
    #[builder(setters(name = with_exclude), default)]
    exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns the maximum depth to traverse.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns whether to include hidden files/directories.
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns whether to respect .gitignore files.
    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    /// Returns the skip directories list.
    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Returns the exclude globs.
    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Creates options for scanning a game or Mod Organizer mods directory.
    ///
    /// - Ignores hidden files
    /// - Does not consult .gitignore (mod folders are rarely repositories)
    /// - Skips VCS metadata directories
    #[must_use]
    pub fn for_mods_dir() -> Self {
        Self::builder()
            .with_skip_dirs(vec![
                ".git".to_string(),
                ".hg".to_string(),
                ".svn".to_string(),
            ])
            .build()
    }
}

/// Result of a walk.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    errors: Vec<String>,
}

impl WalkResult {
    /// Returns the files found during traversal, in visit order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the messages of entries that could not be visited.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Builds a `WalkBuilder` with the given options.
///
/// Entries are sorted by file name so that repeated walks of the same tree
/// visit paths in the same order.
fn build_walker(root: &Path, options: &WalkOptions, excludes: Vec<Glob<'static>>) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.standard_filters(false);
    builder.max_depth(options.max_depth());
    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());

    builder.sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b));

    if !options.skip_dirs().is_empty() || !excludes.is_empty() {
        let skip_dirs = options.skip_dirs().to_vec();
        let root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            if let Ok(rel_path) = entry.path().strip_prefix(&root)
                && !rel_path.as_os_str().is_empty()
                && excludes.iter().any(|glob| glob.is_match(rel_path))
            {
                return false;
            }
            true
        });
    }

    builder
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Glob<'static>>> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern)
                .map(Glob::into_owned)
                .map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))
        })
        .collect()
}

/// Walks `root` recursively in sorted order.
///
/// Unreadable entries do not abort the walk; their messages are kept in
/// [`WalkResult::errors`].
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - An exclude glob is invalid.
///
/// # Example
/// ```no_run
/// use smoot::utility::fs::walk::{walk, WalkOptions};
///
/// let result = walk("/games/7DaysToDie/Mods", &WalkOptions::for_mods_dir())?;
/// println!("Found {} files", result.files().len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let excludes = compile_excludes(options.exclude())?;

    let mut files = Vec::new();
    let mut errors = Vec::new();

    for entry_result in build_walker(root, options, excludes).build() {
        match entry_result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => errors.push(e.to_string()),
        }
    }

    Ok(WalkResult {
        files,
        errors,
    })
}

/// Finds files whose name satisfies `predicate`, in sorted walk order.
///
/// # Errors
///
/// Returns an error under the same conditions as [`walk`].
///
/// # Example
/// ```no_run
/// use smoot::utility::fs::walk::{find_files_named, WalkOptions};
///
/// let descriptors = find_files_named("/games/Mods", &WalkOptions::default(), |name| {
///     name.eq_ignore_ascii_case("ModInfo.xml")
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files_named<P, F>(root: P, options: &WalkOptions, predicate: F) -> Result<WalkResult>
where
    P: AsRef<Path>,
    F: Fn(&str) -> bool,
{
    let mut result = walk(root, options)?;
    result.files.retain(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(&predicate)
    });
    Ok(result)
}
