//! `pluglink overlay`

use super::pipeline;
use crate::cli::{RegistryArgs, ResolveArgs};
use crate::error::Result;
use std::path::Path;
use tokio::runtime::Runtime;

pub fn run_overlay(
    resolve: &ResolveArgs,
    registry: &RegistryArgs,
    packages_root: &Path,
    output: &Path,
) -> Result<()> {
    let runtime = Runtime::new()?;
    let resolved = pipeline::resolve_set(&runtime, resolve, pipeline::registry(registry))?;

    let plan = plug_overlay::plan(&resolved, packages_root)?;
    let summary = plug_overlay::build(&plan, output)?;

    println!(
        "overlay at {}: {} created, {} kept, {} replaced, {} unresolved skipped",
        output.display(),
        summary.created,
        summary.kept,
        summary.replaced,
        summary.skipped_unresolved
    );
    Ok(())
}
