//! Canonical plugin identifiers

use crate::alias::AliasTable;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical upstream plugin coordinate of the form `owner/repo`.
///
/// The repository segment may carry periods (`folke/todo-comments.nvim`) or a
/// module qualifier (`owner/repo.module`); both are kept verbatim. Comparison
/// is case-sensitive and no local-name transformation is ever applied here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginIdentifier {
    inner: String,
}

impl PluginIdentifier {
    /// Parse an identifier that already carries an owner segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let Some((owner, repo)) = raw.split_once('/') else {
            return Err(Error::malformed(raw, "missing owner segment"));
        };
        if owner.is_empty() {
            return Err(Error::malformed(raw, "empty owner segment"));
        }
        if repo.is_empty() {
            return Err(Error::malformed(raw, "empty repository segment"));
        }
        if repo.contains('/') {
            return Err(Error::malformed(raw, "more than one `/` separator"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(Error::malformed(raw, "contains whitespace"));
        }
        Ok(Self {
            inner: raw.to_string(),
        })
    }

    /// Canonicalize a raw identifier, expanding bare short aliases.
    ///
    /// A bare name (no `/`) must have an alias table entry; otherwise it is
    /// malformed input, not merely unresolved.
    pub fn normalize(raw: &str, aliases: &AliasTable) -> Result<Self> {
        let raw = raw.trim();
        if raw.contains('/') {
            return Self::parse(raw);
        }
        match aliases.expand(raw) {
            Some(full) => Self::parse(full),
            None => Err(Error::UnknownAlias {
                name: raw.to_string(),
            }),
        }
    }

    /// The full canonical string, `owner/repo`.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The owner segment.
    pub fn owner(&self) -> &str {
        self.inner.split_once('/').map(|(o, _)| o).unwrap_or("")
    }

    /// The repository segment, verbatim (qualifiers and periods included).
    pub fn repo(&self) -> &str {
        self.inner
            .split_once('/')
            .map(|(_, r)| r)
            .unwrap_or(&self.inner)
    }
}

impl fmt::Display for PluginIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
