//! Override tables
//!
//! Two TOML tables map identifiers to local packages: a hand-curated file
//! (source of truth) and a machine-generated file of reviewed suggestions.
//! Both are loaded once per run into one immutable snapshot; where they
//! disagree the curated entry wins. Nothing here ever writes the tables
//! back — merging generated entries into the curated file is an explicit
//! human or automation step.
//!
//! ```toml
//! [plugins]
//! "folke/todo-comments.nvim" = "todo-comments-nvim"
//!
//! [multi-module."echasnovski/mini.nvim"]
//! package = "mini-nvim"
//! modules = ["mini-ai", "mini-pairs"]
//! ```

use crate::error::{Error, Result};
use crate::ident::PluginIdentifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// One multi-module mapping: one built package serving several modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiModuleEntry {
    pub package: String,
    pub modules: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    plugins: BTreeMap<String, String>,
    #[serde(default, rename = "multi-module")]
    multi_module: BTreeMap<String, MultiModuleEntry>,
}

/// Immutable snapshot of both override tables, curated entries winning.
#[derive(Debug, Default)]
pub struct OverrideTables {
    direct: BTreeMap<String, String>,
    multi: BTreeMap<String, MultiModuleEntry>,
}

impl OverrideTables {
    /// Load the curated table and, optionally, the generated table.
    pub fn load(curated: &Path, generated: Option<&Path>) -> Result<Self> {
        let mut tables = Self::default();
        // Generated first so curated entries overwrite on collision.
        if let Some(generated) = generated {
            tables.absorb(parse_file(generated)?);
        }
        tables.absorb(parse_file(curated)?);
        debug!(
            direct = tables.direct.len(),
            multi = tables.multi.len(),
            "override tables loaded"
        );
        Ok(tables)
    }

    /// Parse a snapshot from in-memory TOML (tests, embedded defaults).
    pub fn from_toml(curated: &str, generated: Option<&str>) -> Result<Self> {
        let mut tables = Self::default();
        if let Some(generated) = generated {
            tables.absorb(parse_str(generated, Path::new("<generated>"))?);
        }
        tables.absorb(parse_str(curated, Path::new("<curated>"))?);
        Ok(tables)
    }

    fn absorb(&mut self, file: OverrideFile) {
        self.direct.extend(file.plugins);
        self.multi.extend(file.multi_module);
    }

    /// Direct mapping for an identifier, if present.
    pub fn direct(&self, id: &PluginIdentifier) -> Option<&str> {
        self.direct.get(id.as_str()).map(String::as_str)
    }

    /// Multi-module mapping for an identifier, if present.
    pub fn multi(&self, id: &PluginIdentifier) -> Option<&MultiModuleEntry> {
        self.multi.get(id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.multi.is_empty()
    }
}

fn parse_file(path: &Path) -> Result<OverrideFile> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_str(&text, path)
}

fn parse_str(text: &str, path: &Path) -> Result<OverrideFile> {
    toml::from_str(text).map_err(|e| Error::OverrideParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CURATED: &str = r#"
[plugins]
"folke/todo-comments.nvim" = "todo-comments-nvim"
"nvim-lua/plenary.nvim" = "plenary-nvim"

[multi-module."echasnovski/mini.nvim"]
package = "mini-nvim"
modules = ["mini-ai", "mini-pairs"]
"#;

    const GENERATED: &str = r#"
[plugins]
"folke/todo-comments.nvim" = "stale-generated-name"
"someone/new-plugin" = "new_plugin"
"#;

    fn id(s: &str) -> PluginIdentifier {
        PluginIdentifier::parse(s).unwrap()
    }

    #[test]
    fn test_direct_lookup() {
        let tables = OverrideTables::from_toml(CURATED, None).unwrap();
        assert_eq!(
            tables.direct(&id("folke/todo-comments.nvim")),
            Some("todo-comments-nvim")
        );
        assert_eq!(tables.direct(&id("unknown/plugin")), None);
    }

    #[test]
    fn test_multi_module_lookup() {
        let tables = OverrideTables::from_toml(CURATED, None).unwrap();
        let entry = tables.multi(&id("echasnovski/mini.nvim")).unwrap();
        assert_eq!(entry.package, "mini-nvim");
        assert_eq!(entry.modules, vec!["mini-ai", "mini-pairs"]);
    }

    #[test]
    fn test_curated_wins_over_generated() {
        let tables = OverrideTables::from_toml(CURATED, Some(GENERATED)).unwrap();
        assert_eq!(
            tables.direct(&id("folke/todo-comments.nvim")),
            Some("todo-comments-nvim"),
            "curated entry must shadow the generated one"
        );
        // Entries only in the generated table still apply.
        assert_eq!(tables.direct(&id("someone/new-plugin")), Some("new_plugin"));
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = OverrideTables::from_toml("not valid toml [", None).unwrap_err();
        assert!(matches!(err, Error::OverrideParse { .. }));
    }
}
