//! Exact-substring anchor substitution

use crate::error::{Error, Result};
use tracing::debug;

/// One anchored substitution: replace the first exact occurrence of
/// `anchor` (whitespace and indentation included) with `replacement`.
#[derive(Debug, Clone)]
pub struct AnchorPatch {
    /// Short name for diagnostics, e.g. `spec-section`.
    pub name: String,
    pub anchor: String,
    pub replacement: String,
}

impl AnchorPatch {
    pub fn new(
        name: impl Into<String>,
        anchor: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            anchor: anchor.into(),
            replacement: replacement.into(),
        }
    }
}

/// Apply patches in sequence; all-or-nothing.
///
/// Each patch requires an exact anchor match and asserts its anchor is gone
/// afterwards; a terminal pass re-scans the output for every original anchor.
/// `file` names the input in diagnostics so the caller can fix it and re-run.
pub fn apply_all(text: &str, patches: &[AnchorPatch], file: &str) -> Result<String> {
    let mut output = text.to_string();

    for patch in patches {
        if !output.contains(&patch.anchor) {
            return Err(Error::AnchorNotFound {
                anchor: patch.name.clone(),
                file: file.to_string(),
            });
        }
        output = output.replacen(&patch.anchor, &patch.replacement, 1);
        if output.contains(&patch.anchor) {
            return Err(Error::AnchorStillPresent {
                anchor: patch.name.clone(),
                file: file.to_string(),
            });
        }
        debug!(patch = %patch.name, "anchor substituted");
    }

    // Terminal assertion: no original anchor may survive anywhere.
    for patch in patches {
        if output.contains(&patch.anchor) {
            return Err(Error::AnchorStillPresent {
                anchor: patch.name.clone(),
                file: file.to_string(),
            });
        }
    }

    Ok(output)
}
