//! Static short-alias table
//!
//! A handful of plugins are conventionally referred to by a bare name in
//! upstream specs. The table maps those to their full coordinates; anything
//! bare and absent here is rejected as malformed.

use std::collections::BTreeMap;

/// Known bare-name aliases, expanded before resolution begins.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// The built-in alias set.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (short, full) in [
            ("LazyVim", "LazyVim/LazyVim"),
            ("lazy.nvim", "folke/lazy.nvim"),
            ("mini.nvim", "echasnovski/mini.nvim"),
            ("catppuccin", "catppuccin/nvim"),
        ] {
            entries.insert(short.to_string(), full.to_string());
        }
        Self { entries }
    }

    /// Extend the built-in table, e.g. from tool configuration.
    pub fn with_entry(mut self, short: impl Into<String>, full: impl Into<String>) -> Self {
        self.entries.insert(short.into(), full.into());
        self
    }

    /// Look up the full coordinate for a bare short name.
    pub fn expand(&self, short: &str) -> Option<&str> {
        self.entries.get(short).map(String::as_str)
    }
}
