//! `pluglink generate` - the full pipeline
//!
//! Resolution, overlay planning, patching and config merging all complete
//! in memory before anything is written: a fatal error anywhere leaves no
//! partial output behind.

use super::pipeline;
use crate::cli::{RegistryArgs, ResolveArgs};
use crate::error::{CliError, Result};
use colored::Colorize;
use plug_config::LogicalUnit;
use plug_patch::InjectionInputs;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tracing::info;

pub struct GenerateInputs<'a> {
    pub resolve: &'a ResolveArgs,
    pub registry: &'a RegistryArgs,
    pub packages_root: &'a Path,
    pub upstream_config: &'a Path,
    pub version_file: &'a Path,
    pub config_source: Option<&'a Path>,
    pub inline_config: Option<&'a Path>,
    pub imports: &'a [String],
    pub output: &'a Path,
}

pub fn run_generate(inputs: &GenerateInputs<'_>) -> Result<()> {
    let runtime = Runtime::new()?;
    let registry = pipeline::registry(inputs.registry);

    // Phase 1: everything that can fail fatally, all in memory.
    let resolved = pipeline::resolve_set(&runtime, inputs.resolve, registry.clone())?;

    let dev_path = inputs.output.join("dev-path");
    let plan = plug_overlay::plan(&resolved, inputs.packages_root)?;

    let upstream_text = plug_fs::read_text(inputs.upstream_config)?;
    let version_tag = plug_fs::read_text(inputs.version_file)?.trim().to_string();
    if version_tag.is_empty() {
        return Err(CliError::user(format!(
            "version tag file {} is empty",
            inputs.version_file.display()
        )));
    }
    let mut injection = InjectionInputs::new(&dev_path);
    injection.import_groups = inputs.imports.to_vec();
    let patched = plug_patch::patch_upstream(
        &upstream_text,
        &version_tag,
        &injection,
        inputs.upstream_config,
    )?;

    let scanned = plug_config::scan(inputs.config_source)?;
    let inline = match inputs.inline_config {
        Some(path) => plug_config::load_inline(path)?,
        None => Vec::new(),
    };
    let merged = plug_config::merge(scanned, inline)?;

    // Phase 2: only non-fatal diagnostics remain; write everything.
    let summary = plug_overlay::build(&plan, &dev_path)?;
    plug_fs::write_text(&inputs.output.join("lua/config/lazy.lua"), &patched)?;
    for fragment in &merged {
        let path = inputs.output.join(unit_path(&fragment.unit));
        plug_fs::write_text(&path, &fragment.content)?;
    }

    let unresolved = pipeline::unresolved_ids(&resolved);
    if !unresolved.is_empty() {
        let report = runtime.block_on(plug_suggest::analyze(
            &unresolved,
            registry,
            inputs.resolve.jobs,
        ))?;
        plug_fs::write_text(&inputs.output.join("mapping-analysis.md"), &report.render()?)?;
        plug_fs::write_text(
            &inputs.output.join("generated-overrides.toml"),
            &report.override_fragment()?,
        )?;
        println!(
            "{} {} identifier(s) unresolved; see {}",
            "warning".yellow().bold(),
            unresolved.len(),
            inputs.output.join("mapping-analysis.md").display()
        );
    }

    info!(output = %inputs.output.display(), "configuration tree generated");
    println!(
        "generated configuration tree at {} ({} links, {} config unit(s), upstream {})",
        inputs.output.display(),
        summary.created + summary.kept + summary.replaced,
        merged.len(),
        version_tag
    );
    Ok(())
}

fn unit_path(unit: &LogicalUnit) -> PathBuf {
    match unit {
        LogicalUnit::Autocmds => PathBuf::from("lua/config/autocmds.lua"),
        LogicalUnit::Keymaps => PathBuf::from("lua/config/keymaps.lua"),
        LogicalUnit::Options => PathBuf::from("lua/config/options.lua"),
        LogicalUnit::Plugin(name) => PathBuf::from(format!("lua/plugins/{name}.lua")),
    }
}
