//! Error types for plug-patch

/// Result type for plug-patch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Upstream-drift errors raised while patching
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Expected anchor text is absent from the input
    #[error(
        "Upstream drift: anchor `{anchor}` not found in {file}; \
         the upstream format changed, update the anchor text"
    )]
    AnchorNotFound { anchor: String, file: String },

    /// Anchor text survived its own substitution
    #[error(
        "Upstream drift: anchor `{anchor}` still present in {file} after patching; \
         the substitution did not take effect"
    )]
    AnchorStillPresent { anchor: String, file: String },
}
