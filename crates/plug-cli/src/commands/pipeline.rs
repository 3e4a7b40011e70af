//! Shared pipeline steps
//!
//! Loading the feed, canonicalizing identifiers, and running the resolver
//! are common to most commands; they live here so every command sees the
//! same semantics.

use crate::cli::{RegistryArgs, ResolveArgs};
use crate::error::Result;
use plug_registry::{CachedRegistry, EvalConfig, EvalRegistry, Registry, StaticRegistry};
use plug_resolve::{
    load_records, AliasTable, OverrideTables, PluginIdentifier, ResolvedPlugin, Resolver,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::debug;

/// Build the configured registry backend.
///
/// `None` means lookups are disabled entirely (`--offline`).
pub fn registry(args: &RegistryArgs) -> Option<Arc<dyn Registry>> {
    if args.offline {
        return None;
    }
    let config = EvalConfig {
        snapshot: args.snapshot.clone(),
        attr_prefix: args.attr_prefix.clone(),
        timeout: Duration::from_secs(args.eval_timeout),
        ..EvalConfig::default()
    };
    let snapshot = config.snapshot.clone();
    Some(Arc::new(CachedRegistry::new(
        EvalRegistry::new(config),
        snapshot,
    )))
}

/// Collect the canonical identifier set from the feed, in feed order.
///
/// Dependencies count as catalog members too; duplicates keep their first
/// position. Malformed identifiers (including unknown bare aliases) abort
/// the run here, before anything is resolved.
pub fn identifiers(args: &ResolveArgs) -> Result<Vec<PluginIdentifier>> {
    let records = load_records(&args.feed)?;
    let aliases = AliasTable::builtin();

    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();
    for record in &records {
        for raw in std::iter::once(&record.identifier).chain(&record.dependencies) {
            let id = PluginIdentifier::normalize(raw, &aliases)?;
            if seen.insert(id.clone()) {
                ids.push(id);
            }
        }
    }
    debug!(records = records.len(), identifiers = ids.len(), "feed loaded");
    Ok(ids)
}

/// Resolve the full identifier set with bounded parallelism.
pub fn resolve_set(
    runtime: &Runtime,
    resolve: &ResolveArgs,
    registry: Option<Arc<dyn Registry>>,
) -> Result<Vec<ResolvedPlugin>> {
    let ids = identifiers(resolve)?;
    let tables = OverrideTables::load(&resolve.overrides, resolve.generated_overrides.as_deref())?;

    // Without a registry the automatic strategy can never verify, so every
    // non-override identifier lands in the unresolved bucket by design.
    let registry = registry.unwrap_or_else(|| Arc::new(StaticRegistry::empty()));
    let resolver = Resolver::new(tables, registry);

    Ok(runtime.block_on(resolver.resolve_all(&ids, resolve.jobs))?)
}

/// The identifiers of every unresolved plugin in the set.
pub fn unresolved_ids(resolved: &[ResolvedPlugin]) -> Vec<PluginIdentifier> {
    resolved
        .iter()
        .filter(|p| !p.is_resolved())
        .map(|p| p.identifier.clone())
        .collect()
}
