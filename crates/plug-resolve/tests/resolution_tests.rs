//! Integration tests for the resolution pipeline
//!
//! Exercises override tables loaded from disk together with the resolver,
//! the way the CLI drives them.

use plug_registry::StaticRegistry;
use plug_resolve::{OverrideTables, PluginIdentifier, ResolutionMethod, Resolver};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn write_tables(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let curated = dir.path().join("overrides.toml");
    fs::write(
        &curated,
        r#"
[plugins]
"folke/todo-comments.nvim" = "todo-comments-nvim"

[multi-module."echasnovski/mini.nvim"]
package = "mini-nvim"
modules = ["mini-ai", "mini-pairs"]
"#,
    )
    .unwrap();

    let generated = dir.path().join("generated.toml");
    fs::write(
        &generated,
        r#"
[plugins]
"someone/reviewed-plugin" = "reviewed_plugin"
"#,
    )
    .unwrap();

    (curated, generated)
}

fn id(s: &str) -> PluginIdentifier {
    PluginIdentifier::parse(s).unwrap()
}

#[tokio::test]
async fn test_every_override_wins_regardless_of_transform() {
    let temp = TempDir::new().unwrap();
    let (curated, generated) = write_tables(&temp);
    let tables = OverrideTables::load(&curated, Some(&generated)).unwrap();

    // Registry deliberately contains the automatic candidate to prove the
    // override still takes priority.
    let registry = Arc::new(StaticRegistry::new(["todo-comments-nvim"]));
    let resolver = Resolver::new(tables, registry);

    let resolved = resolver.resolve(&id("folke/todo-comments.nvim")).await;
    assert_eq!(resolved.local_package.as_deref(), Some("todo-comments-nvim"));
    assert_eq!(resolved.method, ResolutionMethod::Override);
}

#[tokio::test]
async fn test_generated_table_entries_resolve_as_overrides() {
    let temp = TempDir::new().unwrap();
    let (curated, generated) = write_tables(&temp);
    let tables = OverrideTables::load(&curated, Some(&generated)).unwrap();
    let resolver = Resolver::new(tables, Arc::new(StaticRegistry::empty()));

    let resolved = resolver.resolve(&id("someone/reviewed-plugin")).await;
    assert_eq!(resolved.local_package.as_deref(), Some("reviewed_plugin"));
    assert_eq!(resolved.method, ResolutionMethod::Override);
}

#[tokio::test]
async fn test_multi_module_set_matches_table_exactly() {
    let temp = TempDir::new().unwrap();
    let (curated, _) = write_tables(&temp);
    let tables = OverrideTables::load(&curated, None).unwrap();
    let resolver = Resolver::new(tables, Arc::new(StaticRegistry::empty()));

    let resolved = resolver.resolve(&id("echasnovski/mini.nvim")).await;
    assert_eq!(resolved.method, ResolutionMethod::MultiModuleOverride);
    assert_eq!(resolved.modules, vec!["mini-ai", "mini-pairs"]);
}

#[tokio::test]
async fn test_batch_resolution_mixes_all_methods() {
    let temp = TempDir::new().unwrap();
    let (curated, generated) = write_tables(&temp);
    let tables = OverrideTables::load(&curated, Some(&generated)).unwrap();
    let registry = Arc::new(StaticRegistry::new(["harpoon", "telescope-nvim"]));
    let resolver = Resolver::new(tables, registry);

    let ids = vec![
        id("folke/todo-comments.nvim"),
        id("echasnovski/mini.nvim"),
        id("ThePrimeagen/harpoon"),
        id("someone/never-heard-of-it"),
    ];
    let resolved = resolver.resolve_all(&ids, 4).await.unwrap();

    assert_eq!(resolved.len(), 4);
    assert_eq!(resolved[0].method, ResolutionMethod::Override);
    assert_eq!(resolved[1].method, ResolutionMethod::MultiModuleOverride);
    assert_eq!(resolved[2].method, ResolutionMethod::Automatic);
    assert!(resolved[2].verified);
    assert_eq!(resolved[3].method, ResolutionMethod::Unresolved);
}
