//! Error types for plug-resolve

use std::path::PathBuf;

/// Result type for plug-resolve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during identifier handling and resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Identifier cannot be parsed into owner/repo form
    #[error("Malformed plugin identifier `{identifier}`: {reason}")]
    MalformedIdentifier { identifier: String, reason: String },

    /// Bare short name with no alias table entry
    #[error("Unknown plugin alias `{name}`: not in the alias table and has no owner segment")]
    UnknownAlias { name: String },

    /// I/O failure reading an input file
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Override table failed to parse
    #[error("Failed to parse override table at {path}: {message}")]
    OverrideParse { path: PathBuf, message: String },

    /// Scanner feed failed to parse
    #[error("Failed to parse plugin record feed at {path}: {message}")]
    FeedParse { path: PathBuf, message: String },

    /// A parallel resolution worker terminated abnormally
    #[error("Resolution worker failed: {message}")]
    Worker { message: String },
}

impl Error {
    pub fn malformed(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
