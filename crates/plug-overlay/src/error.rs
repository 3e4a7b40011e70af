//! Error types for plug-overlay

use std::path::PathBuf;

/// Result type for plug-overlay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning or building the overlay
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two identifiers claim the same link name
    #[error(
        "Overlay link name collision: `{link_name}` is claimed by both `{first}` and `{second}`"
    )]
    LinkCollision {
        link_name: String,
        first: String,
        second: String,
    },

    /// A resolved plugin reached planning without a local package
    #[error("Resolved plugin `{identifier}` has no local package")]
    MissingPackage { identifier: String },

    /// The planned link name is occupied by something that is not a symlink
    #[error("Overlay path {path} exists and is not a symbolic link")]
    NotASymlink { path: PathBuf },

    /// I/O failure creating the overlay
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
