// smoot: Seven Days to Die Mod Order Optimization Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              SmootError (~24 bytes)
//!                     |
//!    +--------+------+------+------+-----+
//!    |        |      |      |      |     |
//!    v        v      v      v      v     v
//!  Bailed   Scan  Listing Rename  Cfg   Fs
//! Box<str>   Box    Box    Box    Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Scan     NotFound, NotADirectory, Walk, MalformedMetadata, NoMods
//!   Listing  NotFound, Malformed, UnsupportedFormat, UnknownFormat, NoEntries
//!   Rename   SourceMissing, DestinationExists, Io
//!   Config   ParseError, InvalidValue, NotFound
//!   Fs       NotFound, PermissionDenied, IoError
//!
//! Fatal:     Scan, Listing, Config (unwind before any rename)
//! Per item:  Rename (collected in the sort report)
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SmootError`].
pub type SmootResult<T> = std::result::Result<T, SmootError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SmootError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Mod directory scan failed.
    #[error("scan error: {0}")]
    Scan(#[from] Box<ScanError>),

    /// Load order listing could not be read.
    #[error("listing error: {0}")]
    Listing(#[from] Box<ListingError>),

    /// A single rename failed.
    #[error("rename error: {0}")]
    Rename(#[from] Box<RenameError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

/// Create a fatal [`SmootError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SmootError {
    SmootError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SmootError {
                fn from(err: $error) -> Self {
                    SmootError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ScanError => Scan,
    ListingError => Listing,
    RenameError => Rename,
    ConfigError => Config,
    FsError => Fs,
}

// --- Scan Errors ---

/// Errors raised while discovering `ModInfo.xml` descriptors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Scan root does not exist.
    #[error("directory {} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Scan root exists but is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The directory tree could not be walked.
    #[error("failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// A descriptor could not be read or parsed.
    #[error("malformed mod descriptor {}: {message}", path.display())]
    MalformedMetadata { path: PathBuf, message: String },

    /// The walk finished without finding a single descriptor.
    #[error("no ModInfo.xml files found in {}", path.display())]
    NoMods { path: PathBuf },
}

impl ScanError {
    pub(crate) fn malformed(path: &Path, message: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

// --- Listing Errors ---

/// Errors raised while reading a load order listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Listing file does not exist.
    #[error("modorder file {} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Listing file could not be read.
    #[error("failed to read modorder file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record or line is not valid for its format.
    #[error("invalid record {record}: {message}")]
    Malformed { record: usize, message: String },

    /// Extension is recognized but has no reader.
    #[error("reading {format} input is not yet implemented")]
    UnsupportedFormat { format: &'static str },

    /// Extension is not a listing format at all.
    #[error("unsupported file type: '{extension}'")]
    UnknownFormat { extension: String },

    /// Parsing succeeded but produced nothing to sort.
    #[error("no valid mods found in modorder file (invalid format?)")]
    NoEntries,
}

impl ListingError {
    pub(crate) fn malformed(record: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            record,
            message: message.into(),
        }
    }
}

// --- Rename Errors ---

/// Per-operation rename failures.
///
/// These never abort a sort run; they are collected next to the operation
/// that produced them.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The file to rename vanished before the rename.
    #[error("source {} no longer exists", path.display())]
    SourceMissing { path: PathBuf },

    /// Refusing to overwrite an existing file.
    #[error("destination {} already exists", path.display())]
    DestinationExists { path: PathBuf },

    /// The rename itself failed.
    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised on `path`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}
