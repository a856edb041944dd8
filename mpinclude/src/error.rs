//! Crate-level error type and `Result` alias.
//!
//! File access failures keep the path they happened on so the CLI can
//! report which argument stopped the run.
use std::path::PathBuf;

use thiserror::Error;

use crate::fix::RewriteError;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, MpIncludeError>;

/// Errors raised while rewriting files.
#[derive(Debug, Error)]
pub enum MpIncludeError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written back.
    #[error("failed to write {}", path.display())]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Encoding {
        /// Path that failed.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An explicitly requested configuration file could not be used.
    #[error("invalid config file {}: {message}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// A header name that cannot form an include directive.
    #[error("invalid header name: {header:?}")]
    InvalidHeader {
        /// The rejected header.
        header: String,
    },

    /// Progress output for a finished file could not be written.
    #[error("failed to write report")]
    Report(#[source] std::io::Error),

    /// The computed edits could not be applied.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}
