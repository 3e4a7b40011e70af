//! Inline configuration declarations
//!
//! The second fragment origin: units declared directly in a TOML file
//! instead of scanned from a source tree.
//!
//! ```toml
//! keymaps = "vim.keymap.set('n', '<leader>w', ':w<cr>')"
//!
//! [plugins]
//! telescope = "return { defaults = {} }"
//! ```

use crate::error::{Error, Result};
use crate::fragment::{ConfigFragment, LogicalUnit};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct InlineFile {
    #[serde(default)]
    autocmds: Option<String>,
    #[serde(default)]
    keymaps: Option<String>,
    #[serde(default)]
    options: Option<String>,
    #[serde(default)]
    plugins: BTreeMap<String, String>,
}

/// Load inline declarations from a TOML file.
pub fn load_inline(path: &Path) -> Result<Vec<ConfigFragment>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let file: InlineFile = toml::from_str(&text).map_err(|e| Error::InlineParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut fragments = Vec::new();
    for (unit, content) in [
        (LogicalUnit::Autocmds, file.autocmds),
        (LogicalUnit::Keymaps, file.keymaps),
        (LogicalUnit::Options, file.options),
    ] {
        if let Some(content) = content {
            fragments.push(ConfigFragment::inline(unit, content));
        }
    }
    for (name, content) in file.plugins {
        fragments.push(ConfigFragment::inline(LogicalUnit::Plugin(name), content));
    }
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_inline_declarations() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inline.toml");
        std::fs::write(
            &path,
            r#"
keymaps = "-- maps"

[plugins]
telescope = "-- tele"
"#,
        )
        .unwrap();

        let fragments = load_inline(&path).unwrap();
        let units: Vec<_> = fragments.iter().map(|f| f.unit.to_string()).collect();
        assert_eq!(units, vec!["keymaps", "plugins/telescope"]);
    }

    #[test]
    fn test_bad_toml_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inline.toml");
        std::fs::write(&path, "keymaps = [broken").unwrap();

        let err = load_inline(&path).unwrap_err();
        assert!(matches!(err, Error::InlineParse { .. }));
    }
}
