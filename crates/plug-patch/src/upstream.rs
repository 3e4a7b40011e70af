//! The concrete two-section patch plan for the upstream bootstrap
//!
//! The upstream distribution boots its plugin manager with a spec section
//! (which plugin groups to import) and a checker section (self-update
//! machinery). We rewrite the former to wire in the dev-path overlay and the
//! locally-managed plugin groups, and the latter to disable everything that
//! would fetch from the network at runtime.
//!
//! State machine, linear: locate spec section, replace it, locate checker
//! section, replace it, assert both original anchors are absent, done.

use crate::anchor::{apply_all, AnchorPatch};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Exact upstream spec-section text, indentation included.
pub const SPEC_ANCHOR: &str = r#"  spec = {
    -- add LazyVim and import its plugins
    { "LazyVim/LazyVim", import = "lazyvim.plugins" },
    -- import/override with your plugins
    { import = "plugins" },
  },
"#;

/// Exact upstream checker-section text, indentation included.
pub const CHECKER_ANCHOR: &str = r#"  checker = {
    enabled = true, -- check for plugin updates periodically
    notify = false, -- notify on update
  }, -- automatically check for plugin updates
"#;

/// Generated fragments injected into the upstream bootstrap.
#[derive(Debug, Clone)]
pub struct InjectionInputs {
    /// Overlay directory the plugin manager should treat as its dev path.
    pub dev_path: PathBuf,
    /// Locally-managed plugin-group imports, e.g. `plugins.lang.rust`.
    pub import_groups: Vec<String>,
    /// Directive lines that turn off upstream self-management.
    pub disabled_directives: Vec<String>,
    /// Parser/grammar configuration spec entry, if any.
    pub grammar_block: Option<String>,
}

impl InjectionInputs {
    pub fn new(dev_path: impl Into<PathBuf>) -> Self {
        Self {
            dev_path: dev_path.into(),
            import_groups: Vec::new(),
            disabled_directives: default_disabled_directives(),
            grammar_block: None,
        }
    }

    fn spec_replacement(&self) -> String {
        let mut imports = String::new();
        for group in &self.import_groups {
            imports.push_str(&format!("    {{ import = \"{group}\" }},\n"));
        }
        if let Some(block) = &self.grammar_block {
            for line in block.lines() {
                imports.push_str(&format!("    {line}\n"));
            }
        }
        format!(
            r#"  spec = {{
    {{ "LazyVim/LazyVim", import = "lazyvim.plugins" }},
{imports}    {{ import = "plugins" }},
  }},
  dev = {{
    path = "{}",
    patterns = {{ "" }},
    fallback = false,
  }},
"#,
            self.dev_path.display()
        )
    }

    fn checker_replacement(&self) -> String {
        let mut out = String::new();
        for directive in &self.disabled_directives {
            out.push_str(&format!("  {directive}\n"));
        }
        out
    }
}

fn default_disabled_directives() -> Vec<String> {
    vec![
        "checker = { enabled = false },".to_string(),
        "change_detection = { enabled = false },".to_string(),
        "install = { missing = false },".to_string(),
    ]
}

/// Patch the upstream bootstrap text.
///
/// `version_tag` is the upstream provenance tag (version or commit) recorded
/// in the generated header; `source` names the artifact in drift diagnostics.
pub fn patch_upstream(
    text: &str,
    version_tag: &str,
    inputs: &InjectionInputs,
    source: &Path,
) -> Result<String> {
    let patches = [
        AnchorPatch::new("spec-section", SPEC_ANCHOR, inputs.spec_replacement()),
        AnchorPatch::new(
            "checker-section",
            CHECKER_ANCHOR,
            inputs.checker_replacement(),
        ),
    ];

    let patched = apply_all(text, &patches, &source.display().to_string())?;

    Ok(format!(
        "-- Generated by pluglink from upstream {version_tag}.\n\
         -- Plugins are served from the dev-path overlay; do not edit by hand.\n\
         {patched}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn upstream_fixture() -> String {
        format!(
            "require(\"lazy\").setup({{\n{SPEC_ANCHOR}  defaults = {{ lazy = true }},\n{CHECKER_ANCHOR}}})\n"
        )
    }

    #[test]
    fn test_patch_injects_dev_path_and_imports() {
        let mut inputs = InjectionInputs::new("/overlay/dev-path");
        inputs.import_groups = vec!["plugins.lang.rust".to_string()];

        let out =
            patch_upstream(&upstream_fixture(), "v12.44.0", &inputs, Path::new("init.lua"))
                .unwrap();

        assert!(out.starts_with("-- Generated by pluglink from upstream v12.44.0."));
        assert!(out.contains("path = \"/overlay/dev-path\""));
        assert!(out.contains("{ import = \"plugins.lang.rust\" },"));
        assert!(out.contains("checker = { enabled = false },"));
        // Untouched sections pass through.
        assert!(out.contains("defaults = { lazy = true },"));
    }

    #[test]
    fn test_original_anchors_absent_after_patch() {
        let inputs = InjectionInputs::new("/overlay");
        let out =
            patch_upstream(&upstream_fixture(), "v1", &inputs, Path::new("init.lua")).unwrap();

        assert!(!out.contains(SPEC_ANCHOR));
        assert!(!out.contains(CHECKER_ANCHOR));
    }

    #[test]
    fn test_grammar_block_lands_inside_spec_section() {
        let mut inputs = InjectionInputs::new("/overlay");
        inputs.grammar_block = Some(
            "{ \"nvim-treesitter/nvim-treesitter\", opts = { ensure_installed = {} } },"
                .to_string(),
        );

        let out =
            patch_upstream(&upstream_fixture(), "v1", &inputs, Path::new("init.lua")).unwrap();
        assert!(out.contains("    { \"nvim-treesitter/nvim-treesitter\""));
    }

    #[test]
    fn test_drifted_spec_section_fails_with_named_anchor() {
        // Upstream renamed one key inside the anchor.
        let drifted = upstream_fixture().replace("import = \"lazyvim.plugins\"", "import = \"lazyvim.spec\"");
        let inputs = InjectionInputs::new("/overlay");

        let err = patch_upstream(&drifted, "v1", &inputs, Path::new("lua/config/lazy.lua"))
            .unwrap_err();
        match err {
            Error::AnchorNotFound { anchor, file } => {
                assert_eq!(anchor, "spec-section");
                assert_eq!(file, "lua/config/lazy.lua");
            }
            other => panic!("expected AnchorNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_patching_is_deterministic() {
        let inputs = InjectionInputs::new("/overlay");
        let a = patch_upstream(&upstream_fixture(), "v1", &inputs, Path::new("f")).unwrap();
        let b = patch_upstream(&upstream_fixture(), "v1", &inputs, Path::new("f")).unwrap();
        assert_eq!(a, b);
    }
}
