//! Error types for plug-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from plug-resolve
    #[error(transparent)]
    Resolve(#[from] plug_resolve::Error),

    /// Error from plug-suggest
    #[error(transparent)]
    Suggest(#[from] plug_suggest::Error),

    /// Error from plug-overlay
    #[error(transparent)]
    Overlay(#[from] plug_overlay::Error),

    /// Error from plug-patch
    #[error(transparent)]
    Patch(#[from] plug_patch::Error),

    /// Error from plug-config
    #[error(transparent)]
    Config(#[from] plug_config::Error),

    /// Error from plug-fs
    #[error(transparent)]
    Fs(#[from] plug_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
