//! Evaluator-backed registry lookups
//!
//! Invokes the build system's evaluator (`nix eval` by default) against a
//! pinned registry snapshot. Read-only: the attribute is forced but never
//! built. Each call carries its own timeout so a wedged evaluator cannot
//! stall the pipeline.

use crate::{Error, Lookup, Registry, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Configuration for the evaluator-backed registry.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Evaluator binary, e.g. `nix`
    pub program: String,
    /// Pinned snapshot reference, e.g. `github:NixOS/nixpkgs/<rev>`
    pub snapshot: String,
    /// Attribute set the candidate names live under, e.g. `vimPlugins`
    pub attr_prefix: String,
    /// Per-call timeout
    pub timeout: Duration,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            program: "nix".to_string(),
            snapshot: "nixpkgs".to_string(),
            attr_prefix: "vimPlugins".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Registry backed by the external evaluator.
pub struct EvalRegistry {
    config: EvalConfig,
}

impl EvalRegistry {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    fn attr_path(&self, name: &str) -> String {
        format!(
            "{}#{}.{}.pname",
            self.config.snapshot, self.config.attr_prefix, name
        )
    }
}

#[async_trait]
impl Registry for EvalRegistry {
    async fn lookup(&self, name: &str) -> Result<Lookup> {
        let attr = self.attr_path(name);
        debug!(name, attr = %attr, "registry lookup via evaluator");

        let child = Command::new(&self.config.program)
            .arg("eval")
            .arg("--raw")
            .arg(&attr)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.config.timeout, child)
            .await
            .map_err(|_| Error::Timeout {
                name: name.to_string(),
                timeout: self.config.timeout,
            })?
            .map_err(|e| Error::Spawn {
                command: self.config.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            return Ok(Lookup::Exists);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if is_missing_attribute(&stderr) {
            Ok(Lookup::NotFound)
        } else {
            Err(Error::Eval {
                name: name.to_string(),
                stderr: stderr.trim().to_string(),
            })
        }
    }
}

/// Distinguish "attribute does not exist" diagnostics from real evaluator
/// failures. Covers the phrasings current and older evaluators emit.
fn is_missing_attribute(stderr: &str) -> bool {
    stderr.contains("does not provide attribute")
        || stderr.contains("attribute") && stderr.contains("missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_path_uses_snapshot_and_prefix() {
        let registry = EvalRegistry::new(EvalConfig {
            snapshot: "github:NixOS/nixpkgs/abc123".to_string(),
            ..EvalConfig::default()
        });
        assert_eq!(
            registry.attr_path("telescope-nvim"),
            "github:NixOS/nixpkgs/abc123#vimPlugins.telescope-nvim.pname"
        );
    }

    #[test]
    fn test_missing_attribute_detection() {
        assert!(is_missing_attribute(
            "error: flake 'nixpkgs' does not provide attribute 'vimPlugins.nope'"
        ));
        assert!(is_missing_attribute(
            "error: attribute 'nope' missing at (string):1:1"
        ));
        assert!(!is_missing_attribute("error: network unreachable"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_wedged_evaluator_hits_per_call_timeout() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("wedged-evaluator");
        std::fs::write(&script, "#!/bin/sh\nsleep 30\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let registry = EvalRegistry::new(EvalConfig {
            program: script.display().to_string(),
            timeout: Duration::from_millis(100),
            ..EvalConfig::default()
        });
        match registry.lookup("telescope-nvim").await {
            Err(Error::Timeout { name, timeout }) => {
                assert_eq!(name, "telescope-nvim");
                assert_eq!(timeout, Duration::from_millis(100));
            }
            other => panic!("expected timeout error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_evaluator_binary_is_a_spawn_error() {
        let registry = EvalRegistry::new(EvalConfig {
            program: "/nonexistent/pluglink-no-such-evaluator".to_string(),
            ..EvalConfig::default()
        });
        match registry.lookup("telescope-nvim").await {
            Err(Error::Spawn { command, .. }) => {
                assert_eq!(command, "/nonexistent/pluglink-no-such-evaluator");
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }
}
