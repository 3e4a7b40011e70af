//! Best-effort candidate verification
//!
//! Probes ranked candidates against the registry. Exists confirms a
//! mapping; NotFound discards the candidate; a transport error degrades the
//! candidate to an unverified suggestion and never aborts the remaining
//! candidates or plugins.

use crate::candidates::candidates;
use crate::error::{Error, Result};
use crate::report::MappingReport;
use plug_registry::{Lookup, Registry};
use plug_resolve::PluginIdentifier;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Suggestion outcome for one unresolved identifier.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub identifier: PluginIdentifier,
    /// Registry-confirmed local package, if any candidate verified.
    pub verified: Option<String>,
    /// Plausible but unconfirmed candidates, in rank order.
    pub unverified: Vec<String>,
}

/// Analyze unresolved identifiers, verifying candidates when a registry is
/// available. `limit` bounds concurrent identifier workers.
pub async fn analyze(
    unresolved: &[PluginIdentifier],
    registry: Option<Arc<dyn Registry>>,
    limit: usize,
) -> Result<MappingReport> {
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let mut set = JoinSet::new();

    for (index, id) in unresolved.iter().cloned().enumerate() {
        let registry = registry.clone();
        let semaphore = Arc::clone(&semaphore);
        set.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            (index, suggest_one(id, registry.as_deref()).await)
        });
    }

    let mut slots: Vec<Option<Suggestion>> = vec![None; unresolved.len()];
    while let Some(joined) = set.join_next().await {
        let (index, suggestion) = joined.map_err(|e| Error::Worker {
            message: e.to_string(),
        })?;
        slots[index] = Some(suggestion);
    }

    Ok(MappingReport::new(slots.into_iter().flatten().collect()))
}

async fn suggest_one(id: PluginIdentifier, registry: Option<&dyn Registry>) -> Suggestion {
    let ranked = candidates(&id);

    let Some(registry) = registry else {
        // Verification disabled: everything stays a suggestion.
        return Suggestion {
            identifier: id,
            verified: None,
            unverified: ranked,
        };
    };

    let mut unverified = Vec::new();
    for candidate in ranked {
        match registry.lookup(&candidate).await {
            Ok(Lookup::Exists) => {
                debug!(id = %id, candidate = %candidate, "candidate verified");
                return Suggestion {
                    identifier: id,
                    verified: Some(candidate),
                    unverified: Vec::new(),
                };
            }
            Ok(Lookup::NotFound) => {
                debug!(id = %id, candidate = %candidate, "candidate not in registry");
            }
            Err(e) => {
                warn!(id = %id, candidate = %candidate, error = %e, "verification unavailable, keeping as unverified suggestion");
                unverified.push(candidate);
            }
        }
    }

    Suggestion {
        identifier: id,
        verified: None,
        unverified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use plug_registry::StaticRegistry;

    fn id(s: &str) -> PluginIdentifier {
        PluginIdentifier::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_first_verified_candidate_wins() {
        let registry: Arc<dyn Registry> = Arc::new(StaticRegistry::new(["todo-comments-nvim"]));
        let report = analyze(&[id("folke/todo-comments.nvim")], Some(registry), 4)
            .await
            .unwrap();

        let s = &report.suggestions[0];
        assert_eq!(s.verified.as_deref(), Some("todo-comments-nvim"));
        assert!(s.unverified.is_empty());
    }

    #[tokio::test]
    async fn test_nothing_verified_without_registry() {
        let report = analyze(&[id("a/some-plugin")], None, 4).await.unwrap();

        let s = &report.suggestions[0];
        assert_eq!(s.verified, None);
        assert!(!s.unverified.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_candidates_are_discarded() {
        let registry: Arc<dyn Registry> = Arc::new(StaticRegistry::empty());
        let report = analyze(&[id("a/some-plugin")], Some(registry), 4)
            .await
            .unwrap();

        let s = &report.suggestions[0];
        assert_eq!(s.verified, None);
        assert!(
            s.unverified.is_empty(),
            "definitive NotFound answers leave nothing to review"
        );
    }

    #[tokio::test]
    async fn test_registry_errors_degrade_without_aborting() {
        struct FlakyRegistry;

        #[async_trait]
        impl Registry for FlakyRegistry {
            async fn lookup(&self, name: &str) -> plug_registry::Result<Lookup> {
                if name.contains('_') {
                    Err(plug_registry::Error::Eval {
                        name: name.to_string(),
                        stderr: "boom".to_string(),
                    })
                } else {
                    Ok(Lookup::NotFound)
                }
            }
        }

        let registry: Arc<dyn Registry> = Arc::new(FlakyRegistry);
        let report = analyze(&[id("a/foo-bar"), id("b/plain")], Some(registry), 2)
            .await
            .unwrap();

        assert_eq!(report.suggestions.len(), 2, "errors must not drop plugins");
        let foo = &report.suggestions[0];
        assert_eq!(foo.verified, None);
        assert!(
            foo.unverified.iter().all(|c| c.contains('_')),
            "only errored candidates stay unverified: {:?}",
            foo.unverified
        );
    }
}
