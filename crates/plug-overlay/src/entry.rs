//! Overlay planning
//!
//! Expands resolved plugins into dev-path entries and enforces the link-name
//! uniqueness invariant before any filesystem work happens. Uniqueness lives
//! on link names, not packages: one multi-module package legitimately yields
//! several links.

use crate::error::{Error, Result};
use plug_resolve::ResolvedPlugin;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One planned symbolic link in the overlay directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevPathEntry {
    /// Directory-entry name the plugin manager will look up.
    pub link_name: String,
    /// Built package root, or a module subpath inside it.
    pub target: PathBuf,
    /// Module this link serves, for multi-module packages.
    pub source_module: Option<String>,
    /// Identifier that produced the entry, for diagnostics.
    pub identifier: String,
}

/// The full overlay plan for one run.
#[derive(Debug, Clone)]
pub struct OverlayPlan {
    pub entries: Vec<DevPathEntry>,
    /// Unresolved plugins skipped during planning, surfaced for diagnostics.
    pub skipped_unresolved: usize,
}

/// Expand the resolved set into an overlay plan.
///
/// `packages_root` is where the build system materializes local packages;
/// each package is expected at `<packages_root>/<local_package>`.
///
/// Single-module plugins produce one link named after the repository segment
/// targeting the package root. Multi-module plugins produce one link per
/// declared module, each targeting the module-named subpath of the same
/// package. A link-name collision between different identifiers is fatal.
pub fn plan(resolved: &[ResolvedPlugin], packages_root: &Path) -> Result<OverlayPlan> {
    let mut entries = Vec::new();
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();
    let mut skipped_unresolved = 0;

    for plugin in resolved {
        if !plugin.is_resolved() {
            skipped_unresolved += 1;
            continue;
        }
        let Some(package) = plugin.local_package.as_deref() else {
            return Err(Error::MissingPackage {
                identifier: plugin.identifier.to_string(),
            });
        };
        let package_root = packages_root.join(package);

        if plugin.modules.is_empty() {
            push_entry(
                &mut entries,
                &mut claimed,
                DevPathEntry {
                    link_name: plugin.identifier.repo().to_string(),
                    target: package_root,
                    source_module: None,
                    identifier: plugin.identifier.to_string(),
                },
            )?;
        } else {
            for module in &plugin.modules {
                push_entry(
                    &mut entries,
                    &mut claimed,
                    DevPathEntry {
                        link_name: module.clone(),
                        target: package_root.join(module),
                        source_module: Some(module.clone()),
                        identifier: plugin.identifier.to_string(),
                    },
                )?;
            }
        }
    }

    debug!(
        entries = entries.len(),
        skipped_unresolved, "overlay plan complete"
    );
    Ok(OverlayPlan {
        entries,
        skipped_unresolved,
    })
}

fn push_entry(
    entries: &mut Vec<DevPathEntry>,
    claimed: &mut BTreeMap<String, String>,
    entry: DevPathEntry,
) -> Result<()> {
    if let Some(first) = claimed.get(&entry.link_name) {
        return Err(Error::LinkCollision {
            link_name: entry.link_name.clone(),
            first: first.clone(),
            second: entry.identifier.clone(),
        });
    }
    claimed.insert(entry.link_name.clone(), entry.identifier.clone());
    entries.push(entry);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plug_resolve::{PluginIdentifier, ResolutionMethod, ResolvedPlugin};
    use pretty_assertions::assert_eq;

    fn single(id: &str, package: &str) -> ResolvedPlugin {
        ResolvedPlugin {
            identifier: PluginIdentifier::parse(id).unwrap(),
            local_package: Some(package.to_string()),
            modules: Vec::new(),
            verified: true,
            method: ResolutionMethod::Automatic,
        }
    }

    fn multi(id: &str, package: &str, modules: &[&str]) -> ResolvedPlugin {
        ResolvedPlugin {
            identifier: PluginIdentifier::parse(id).unwrap(),
            local_package: Some(package.to_string()),
            modules: modules.iter().map(|m| m.to_string()).collect(),
            verified: false,
            method: ResolutionMethod::MultiModuleOverride,
        }
    }

    fn unresolved(id: &str) -> ResolvedPlugin {
        ResolvedPlugin {
            identifier: PluginIdentifier::parse(id).unwrap(),
            local_package: None,
            modules: Vec::new(),
            verified: false,
            method: ResolutionMethod::Unresolved,
        }
    }

    #[test]
    fn test_single_module_link_named_after_repo_segment() {
        let plan = plan(
            &[single("folke/todo-comments.nvim", "todo-comments-nvim")],
            Path::new("/store"),
        )
        .unwrap();

        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].link_name, "todo-comments.nvim");
        assert_eq!(
            plan.entries[0].target,
            Path::new("/store/todo-comments-nvim")
        );
        assert_eq!(plan.entries[0].source_module, None);
    }

    #[test]
    fn test_multi_module_expands_to_one_link_per_module() {
        let plan = plan(
            &[multi(
                "echasnovski/mini.nvim",
                "mini-nvim",
                &["mini-ai", "mini-pairs"],
            )],
            Path::new("/store"),
        )
        .unwrap();

        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.entries[0].link_name, "mini-ai");
        assert_eq!(plan.entries[0].target, Path::new("/store/mini-nvim/mini-ai"));
        assert_eq!(plan.entries[1].link_name, "mini-pairs");
        assert_eq!(
            plan.entries[1].target,
            Path::new("/store/mini-nvim/mini-pairs")
        );
    }

    #[test]
    fn test_unresolved_plugins_are_skipped_and_counted() {
        let plan = plan(
            &[
                single("a/one", "one"),
                unresolved("b/two"),
                unresolved("c/three"),
            ],
            Path::new("/store"),
        )
        .unwrap();

        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.skipped_unresolved, 2);
    }

    #[test]
    fn test_link_collision_names_both_contributors() {
        let err = plan(
            &[single("a/harpoon", "harpoon"), single("b/harpoon", "harpoon2")],
            Path::new("/store"),
        )
        .unwrap_err();

        match err {
            Error::LinkCollision {
                link_name,
                first,
                second,
            } => {
                assert_eq!(link_name, "harpoon");
                assert_eq!(first, "a/harpoon");
                assert_eq!(second, "b/harpoon");
            }
            other => panic!("expected LinkCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_module_link_colliding_with_plain_link_is_fatal() {
        let err = plan(
            &[
                single("a/mini-ai", "mini-ai-pkg"),
                multi("echasnovski/mini.nvim", "mini-nvim", &["mini-ai"]),
            ],
            Path::new("/store"),
        )
        .unwrap_err();

        assert!(matches!(err, Error::LinkCollision { .. }));
    }
}
