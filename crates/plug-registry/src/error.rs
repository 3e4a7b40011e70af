//! Error types for plug-registry

use std::time::Duration;

/// Result type for plug-registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during registry lookups
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Evaluator process could not be spawned
    #[error("Failed to spawn evaluator `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Evaluator exceeded the per-call timeout
    #[error("Registry lookup for `{name}` timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },

    /// Evaluator exited with an error that is not a missing attribute
    #[error("Evaluator failed for `{name}`: {stderr}")]
    Eval { name: String, stderr: String },
}
