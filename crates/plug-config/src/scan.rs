//! Config source tree scanning
//!
//! Layout contract: an optional root containing either the nested form
//! (`config/autocmds.lua`, `config/keymaps.lua`, `config/options.lua`) or
//! the same files flat at the root, plus `plugins/*.lua`. A root that was
//! configured but is missing on disk is a fatal input error, distinct from
//! "no root configured".

use crate::error::{Error, Result};
use crate::fragment::{ConfigFragment, LogicalUnit, Origin};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Scan the configured source tree into fragments.
///
/// `None` means no tree was configured and yields an empty set.
pub fn scan(root: Option<&Path>) -> Result<Vec<ConfigFragment>> {
    let Some(root) = root else {
        return Ok(Vec::new());
    };
    if !root.is_dir() {
        return Err(Error::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let mut fragments = Vec::new();

    let core_units = [
        ("autocmds.lua", LogicalUnit::Autocmds),
        ("keymaps.lua", LogicalUnit::Keymaps),
        ("options.lua", LogicalUnit::Options),
    ];
    for (file_name, unit) in core_units {
        // Nested layout wins; flat is the fallback.
        let nested = root.join("config").join(file_name);
        let flat = root.join(file_name);
        let path = if nested.is_file() {
            nested
        } else if flat.is_file() {
            flat
        } else {
            continue;
        };
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        debug!(unit = %unit, path = %path.display(), "scanned config unit");
        fragments.push(ConfigFragment::new(unit, Origin::ScannedFile, content));
    }

    let plugins_dir = root.join("plugins");
    if plugins_dir.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(&plugins_dir)
            .map_err(|e| Error::io(&plugins_dir, e))?
            .collect::<std::io::Result<_>>()
            .map_err(|e| Error::io(&plugins_dir, e))?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("lua") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            fragments.push(ConfigFragment::new(
                LogicalUnit::Plugin(stem.to_string()),
                Origin::ScannedFile,
                content,
            ));
        }
    }

    Ok(fragments)
}
