//! `pluglink patch`

use crate::error::{CliError, Result};
use plug_patch::InjectionInputs;
use std::path::Path;

pub fn run_patch(
    input: &Path,
    version_file: &Path,
    dev_path: &Path,
    imports: &[String],
    grammar_file: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let text = plug_fs::read_text(input)?;
    let version_tag = plug_fs::read_text(version_file)?.trim().to_string();
    if version_tag.is_empty() {
        return Err(CliError::user(format!(
            "version tag file {} is empty",
            version_file.display()
        )));
    }

    let mut inputs = InjectionInputs::new(dev_path);
    inputs.import_groups = imports.to_vec();
    if let Some(grammar_file) = grammar_file {
        inputs.grammar_block = Some(plug_fs::read_text(grammar_file)?);
    }

    let patched = plug_patch::patch_upstream(&text, &version_tag, &inputs, input)?;
    plug_fs::write_text(output, &patched)?;

    println!("patched {} -> {}", input.display(), output.display());
    Ok(())
}
