//! Error types for project packing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while packing a project directory.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory does not exist or is not a directory.
    #[error("source directory not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Entry path is not located under the source root.
    #[error("path {path} is not under source directory {root}")]
    InvalidPath {
        /// The offending entry path.
        path: PathBuf,
        /// The source root being packed.
        root: PathBuf,
    },

    /// Entry path cannot be represented in the archive.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// The offending entry path.
        path: PathBuf,
    },

    /// Compression level outside the supported range.
    #[error("invalid compression level: {level} (expected 0-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// Directory traversal failed (unreadable entry, filesystem loop).
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Zip writer reported a failure.
    #[error("zip write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
}
