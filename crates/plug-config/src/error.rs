//! Error types for plug-config

use crate::fragment::{LogicalUnit, Origin};
use std::path::PathBuf;

/// Result type for plug-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning or merging config fragments
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Both origins supplied content for the same logical unit
    #[error("Conflicting config for `{unit}`: supplied by both {first} and {second}")]
    Conflict {
        unit: LogicalUnit,
        first: Origin,
        second: Origin,
    },

    /// A config root was configured but does not exist on disk
    #[error("Configured config source directory {path} does not exist")]
    MissingRoot { path: PathBuf },

    /// Inline declaration file failed to parse
    #[error("Failed to parse inline config declarations at {path}: {message}")]
    InlineParse { path: PathBuf, message: String },

    /// I/O failure reading a scanned file
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
