//! Error types for plug-suggest

/// Result type for plug-suggest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the suggestion engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parallel verification worker terminated abnormally
    #[error("Verification worker failed: {message}")]
    Worker { message: String },

    /// The override fragment could not be serialized
    #[error("Failed to render override fragment: {0}")]
    Fragment(#[from] toml::ser::Error),
}
