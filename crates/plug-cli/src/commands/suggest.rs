//! `pluglink suggest`

use super::pipeline;
use crate::cli::{RegistryArgs, ResolveArgs};
use crate::error::Result;
use colored::Colorize;
use std::path::Path;
use tokio::runtime::Runtime;

pub fn run_suggest(
    resolve: &ResolveArgs,
    registry: &RegistryArgs,
    report_path: &Path,
    fragment_path: Option<&Path>,
) -> Result<()> {
    let runtime = Runtime::new()?;
    let registry = pipeline::registry(registry);
    let resolved = pipeline::resolve_set(&runtime, resolve, registry.clone())?;
    let unresolved = pipeline::unresolved_ids(&resolved);

    if unresolved.is_empty() {
        println!("{} every identifier resolved; nothing to analyze", "ok".green().bold());
    }

    let report = runtime.block_on(plug_suggest::analyze(&unresolved, registry, resolve.jobs))?;

    plug_fs::write_text(report_path, &report.render()?)?;
    println!(
        "wrote mapping analysis for {} identifier(s) to {}",
        unresolved.len(),
        report_path.display()
    );

    if let Some(fragment_path) = fragment_path {
        plug_fs::write_text(fragment_path, &report.override_fragment()?)?;
        println!(
            "wrote {} verified mapping(s) to {}",
            report.verified().count(),
            fragment_path.display()
        );
    }

    Ok(())
}
