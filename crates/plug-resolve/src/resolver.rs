//! Ordered resolution strategies
//!
//! Strict first-match cascade: multi-module override, direct override,
//! deterministic transform + registry existence check, else unresolved.
//! Earlier strategies are never re-entered and the automatic transform is
//! never retried with a different rule ordering.

use crate::error::{Error, Result};
use crate::ident::PluginIdentifier;
use crate::overrides::OverrideTables;
use crate::transform::local_name_candidate;
use plug_registry::{Lookup, Registry};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// How a plugin identifier was mapped to its local package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionMethod {
    Override,
    MultiModuleOverride,
    Automatic,
    Unresolved,
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Override => "override",
            Self::MultiModuleOverride => "multi-module-override",
            Self::Automatic => "automatic",
            Self::Unresolved => "unresolved",
        };
        f.write_str(s)
    }
}

/// The single resolution outcome for one identifier.
///
/// Unresolved identifiers are values, not errors: they stay in the set so
/// the overlay builder can count them and the suggestion engine can report
/// them. They are never silently dropped.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPlugin {
    pub identifier: PluginIdentifier,
    pub local_package: Option<String>,
    /// Declared module names for multi-module packages; empty otherwise.
    pub modules: Vec<String>,
    /// True only when the registry confirmed the name exists.
    pub verified: bool,
    pub method: ResolutionMethod,
}

impl ResolvedPlugin {
    pub fn is_resolved(&self) -> bool {
        self.method != ResolutionMethod::Unresolved
    }
}

/// Resolves identifiers against an immutable override snapshot and the
/// package registry. Cheap to clone; clones share the snapshot.
#[derive(Clone)]
pub struct Resolver {
    tables: Arc<OverrideTables>,
    registry: Arc<dyn Registry>,
}

impl Resolver {
    pub fn new(tables: OverrideTables, registry: Arc<dyn Registry>) -> Self {
        Self {
            tables: Arc::new(tables),
            registry,
        }
    }

    /// Resolve one identifier. Always yields exactly one `ResolvedPlugin`.
    pub async fn resolve(&self, id: &PluginIdentifier) -> ResolvedPlugin {
        if let Some(entry) = self.tables.multi(id) {
            debug!(id = %id, package = %entry.package, "multi-module override match");
            return ResolvedPlugin {
                identifier: id.clone(),
                local_package: Some(entry.package.clone()),
                modules: entry.modules.clone(),
                verified: false,
                method: ResolutionMethod::MultiModuleOverride,
            };
        }

        if let Some(package) = self.tables.direct(id) {
            debug!(id = %id, package, "direct override match");
            return ResolvedPlugin {
                identifier: id.clone(),
                local_package: Some(package.to_string()),
                modules: Vec::new(),
                verified: false,
                method: ResolutionMethod::Override,
            };
        }

        let candidate = local_name_candidate(id.repo());
        match self.registry.lookup(&candidate).await {
            Ok(Lookup::Exists) => {
                debug!(id = %id, package = %candidate, "automatic resolution verified");
                ResolvedPlugin {
                    identifier: id.clone(),
                    local_package: Some(candidate),
                    modules: Vec::new(),
                    verified: true,
                    method: ResolutionMethod::Automatic,
                }
            }
            Ok(Lookup::NotFound) => self.unresolved(id),
            Err(e) => {
                warn!(id = %id, candidate = %candidate, error = %e, "registry lookup failed, treating as unresolved");
                self.unresolved(id)
            }
        }
    }

    fn unresolved(&self, id: &PluginIdentifier) -> ResolvedPlugin {
        ResolvedPlugin {
            identifier: id.clone(),
            local_package: None,
            modules: Vec::new(),
            verified: false,
            method: ResolutionMethod::Unresolved,
        }
    }

    /// Resolve many identifiers in parallel, bounded by `limit` workers.
    ///
    /// Lookups only read the shared snapshot and perform at most one registry
    /// query each, so they are independent. Output order matches input order.
    pub async fn resolve_all(
        &self,
        ids: &[PluginIdentifier],
        limit: usize,
    ) -> Result<Vec<ResolvedPlugin>> {
        let semaphore = Arc::new(Semaphore::new(limit.max(1)));
        let mut set = JoinSet::new();

        for (index, id) in ids.iter().cloned().enumerate() {
            let resolver = self.clone();
            let semaphore = Arc::clone(&semaphore);
            set.spawn(async move {
                // Semaphore is never closed while the set is alive.
                let _permit = semaphore.acquire_owned().await;
                (index, resolver.resolve(&id).await)
            });
        }

        let mut slots: Vec<Option<ResolvedPlugin>> = vec![None; ids.len()];
        while let Some(joined) = set.join_next().await {
            let (index, resolved) = joined.map_err(|e| Error::Worker {
                message: e.to_string(),
            })?;
            slots[index] = Some(resolved);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
