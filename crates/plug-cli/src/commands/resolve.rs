//! `pluglink resolve`

use super::pipeline;
use crate::cli::{RegistryArgs, ResolveArgs};
use crate::error::Result;
use colored::Colorize;
use plug_resolve::ResolutionMethod;
use tokio::runtime::Runtime;

pub fn run_resolve(resolve: &ResolveArgs, registry: &RegistryArgs, json: bool) -> Result<()> {
    let runtime = Runtime::new()?;
    let resolved = pipeline::resolve_set(&runtime, resolve, pipeline::registry(registry))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved).map_err(std::io::Error::other)?);
        return Ok(());
    }

    let mut counts = [0usize; 4];
    for plugin in &resolved {
        let (label, package) = match plugin.method {
            ResolutionMethod::Override => ("override".green(), plugin.local_package.clone()),
            ResolutionMethod::MultiModuleOverride => (
                "multi-module".green(),
                plugin
                    .local_package
                    .as_ref()
                    .map(|p| format!("{p} [{}]", plugin.modules.join(", "))),
            ),
            ResolutionMethod::Automatic => ("automatic".cyan(), plugin.local_package.clone()),
            ResolutionMethod::Unresolved => ("unresolved".red(), None),
        };
        counts[plugin.method as usize] += 1;
        println!(
            "{:>14}  {}  {}",
            label,
            plugin.identifier,
            package.unwrap_or_else(|| "-".to_string())
        );
    }

    println!();
    println!(
        "{} resolved ({} override, {} multi-module, {} automatic), {} unresolved",
        resolved.len() - counts[ResolutionMethod::Unresolved as usize],
        counts[ResolutionMethod::Override as usize],
        counts[ResolutionMethod::MultiModuleOverride as usize],
        counts[ResolutionMethod::Automatic as usize],
        counts[ResolutionMethod::Unresolved as usize],
    );
    Ok(())
}
