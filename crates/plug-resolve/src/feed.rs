//! Scanner-record feed
//!
//! The upstream source tree is scanned by an external collector which emits
//! an ordered JSON array of pre-parsed plugin records. The core treats the
//! feed as opaque, pre-validated input.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One record emitted by the external scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    /// Raw identifier as written in the upstream spec (may be a bare alias).
    pub identifier: String,
    /// Upstream-declared dependencies, by raw identifier.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Module this record belongs to inside a multi-module package, if any.
    #[serde(default)]
    pub module_membership: Option<String>,
    /// Where the scanner found the record (file path or spec label).
    pub source_origin: String,
}

/// Load the ordered record feed from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<PluginRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::FeedParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let feed = temp.path().join("records.json");
        std::fs::write(
            &feed,
            r#"[
                {
                    "identifier": "folke/lazy.nvim",
                    "dependencies": ["nvim-lua/plenary.nvim"],
                    "sourceOrigin": "lua/plugins/core.lua"
                },
                {
                    "identifier": "echasnovski/mini.nvim",
                    "moduleMembership": "mini-ai",
                    "sourceOrigin": "lua/plugins/editor.lua"
                }
            ]"#,
        )
        .unwrap();

        let records = load_records(&feed).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier, "folke/lazy.nvim");
        assert_eq!(records[0].dependencies, vec!["nvim-lua/plenary.nvim"]);
        assert_eq!(records[1].module_membership.as_deref(), Some("mini-ai"));
    }

    #[test]
    fn test_load_records_bad_json_names_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let feed = temp.path().join("records.json");
        std::fs::write(&feed, "{not json").unwrap();

        let err = load_records(&feed).unwrap_err();
        assert!(matches!(err, Error::FeedParse { .. }));
    }
}
