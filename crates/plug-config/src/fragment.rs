//! Config fragment model

use std::fmt;

/// One addressable slot in the output configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalUnit {
    Autocmds,
    Keymaps,
    Options,
    /// A named plugin-configuration file, e.g. `telescope`.
    Plugin(String),
}

impl fmt::Display for LogicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autocmds => f.write_str("autocmds"),
            Self::Keymaps => f.write_str("keymaps"),
            Self::Options => f.write_str("options"),
            Self::Plugin(name) => write!(f, "plugins/{name}"),
        }
    }
}

/// Where a fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    ScannedFile,
    InlineDeclaration,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScannedFile => f.write_str("a scanned file"),
            Self::InlineDeclaration => f.write_str("an inline declaration"),
        }
    }
}

/// One unit of user configuration from one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFragment {
    pub unit: LogicalUnit,
    pub origin: Origin,
    pub content: String,
}

impl ConfigFragment {
    pub fn new(unit: LogicalUnit, origin: Origin, content: impl Into<String>) -> Self {
        Self {
            unit,
            origin,
            content: content.into(),
        }
    }

    pub fn inline(unit: LogicalUnit, content: impl Into<String>) -> Self {
        Self::new(unit, Origin::InlineDeclaration, content)
    }
}
