//! Overlay construction
//!
//! Creates the planned symbolic links serially inside one output directory,
//! which keeps the idempotence and collision behavior deterministic. Re-runs
//! over the same plan produce a byte-identical link set.

use crate::entry::OverlayPlan;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What the builder did for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub created: usize,
    /// Links that already pointed at the planned target.
    pub kept: usize,
    /// Links that pointed elsewhere and were re-pointed.
    pub replaced: usize,
    pub skipped_unresolved: usize,
}

/// Materialize the overlay plan under `overlay_dir`.
///
/// An existing link with the planned target is kept untouched; a link with a
/// different target is replaced. Anything that is not a symbolic link is
/// never removed.
pub fn build(plan: &OverlayPlan, overlay_dir: &Path) -> Result<BuildSummary> {
    fs::create_dir_all(overlay_dir).map_err(|e| Error::io(overlay_dir, e))?;

    let mut summary = BuildSummary {
        skipped_unresolved: plan.skipped_unresolved,
        ..BuildSummary::default()
    };

    for entry in &plan.entries {
        let link_path = overlay_dir.join(&entry.link_name);

        match fs::symlink_metadata(&link_path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let current = fs::read_link(&link_path).map_err(|e| Error::io(&link_path, e))?;
                if current == entry.target {
                    debug!(link = %entry.link_name, "link already correct");
                    summary.kept += 1;
                    continue;
                }
                fs::remove_file(&link_path).map_err(|e| Error::io(&link_path, e))?;
                symlink(&entry.target, &link_path)?;
                summary.replaced += 1;
            }
            Ok(_) => {
                return Err(Error::NotASymlink { path: link_path });
            }
            Err(_) => {
                symlink(&entry.target, &link_path)?;
                summary.created += 1;
            }
        }
    }

    info!(
        created = summary.created,
        kept = summary.kept,
        replaced = summary.replaced,
        skipped_unresolved = summary.skipped_unresolved,
        "overlay built at {}",
        overlay_dir.display()
    );
    Ok(summary)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::io(link, e))
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::windows::fs::symlink_dir(target, link).map_err(|e| Error::io(link, e))
}
