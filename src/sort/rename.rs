// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor renames that encode a priority.
//!
//! ```text
//! <dir>/ModInfo.xml        --plan(7)-->  <dir>/0007-ModInfo.xml
//! <dir>/0003-ModInfo.xml   --plan(7)-->  <dir>/0007-ModInfo.xml
//! <dir>/0007-ModInfo.xml   --plan(7)-->  same path --> AlreadyNamed
//! ```
//!
//! Each operation stands alone. A failure is returned to the caller and
//! nothing already renamed is rolled back.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::RenameError;
use crate::modinfo::ModInfo;
use crate::priority::Priority;

/// What [`RenameOperation::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameOutcome {
    /// Dry run; the file system was not touched.
    Planned,
    Renamed,
    /// The file already carries the target name.
    AlreadyNamed,
}

/// A single `source -> destination` move within one mod folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOperation {
    source: PathBuf,
    destination: PathBuf,
    priority: Priority,
}

impl RenameOperation {
    /// Plans the rename of `file_name` inside `directory`.
    pub fn new(directory: &Path, file_name: &str, priority: Priority) -> Self {
        Self {
            source: directory.join(file_name),
            destination: directory.join(priority.apply_to(file_name)),
            priority,
        }
    }

    /// Plans the rename of a mod's descriptor.
    #[must_use]
    pub fn plan(info: &ModInfo, priority: Priority) -> Self {
        Self::new(info.directory(), info.file_name(), priority)
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// File name part of the destination.
    #[must_use]
    pub fn destination_file_name(&self) -> Option<&str> {
        self.destination.file_name().and_then(|n| n.to_str())
    }

    /// Performs the rename, or only reports it when `dry_run` is set.
    ///
    /// An existing destination is never overwritten.
    ///
    /// # Errors
    ///
    /// - [`RenameError::SourceMissing`] if the source no longer exists.
    /// - [`RenameError::DestinationExists`] if another file holds the target name.
    /// - [`RenameError::Io`] if the rename itself fails.
    pub fn apply(&self, dry_run: bool) -> Result<RenameOutcome, RenameError> {
        if self.source == self.destination {
            return Ok(RenameOutcome::AlreadyNamed);
        }
        if dry_run {
            return Ok(RenameOutcome::Planned);
        }

        if std::fs::symlink_metadata(&self.source).is_err() {
            return Err(RenameError::SourceMissing {
                path: self.source.clone(),
            });
        }
        if std::fs::symlink_metadata(&self.destination).is_ok() {
            return Err(RenameError::DestinationExists {
                path: self.destination.clone(),
            });
        }

        std::fs::rename(&self.source, &self.destination).map_err(|source| RenameError::Io {
            from: self.source.clone(),
            to: self.destination.clone(),
            source,
        })?;

        Ok(RenameOutcome::Renamed)
    }
}
