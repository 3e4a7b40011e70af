//! pluglink CLI
//!
//! Packages upstream editor plugins into a locally resolvable,
//! declaratively-built configuration tree.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::generate::GenerateInputs;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} plugin packaging pipeline", "pluglink".green().bold());
            println!();
            println!("Run {} for available commands.", "pluglink --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            resolve,
            registry,
            json,
        } => commands::run_resolve(&resolve, &registry, json),
        Commands::Suggest {
            resolve,
            registry,
            report,
            fragment,
        } => commands::run_suggest(&resolve, &registry, &report, fragment.as_deref()),
        Commands::Overlay {
            resolve,
            registry,
            packages_root,
            output,
        } => commands::run_overlay(&resolve, &registry, &packages_root, &output),
        Commands::Patch {
            input,
            version_file,
            dev_path,
            imports,
            grammar_file,
            output,
        } => commands::run_patch(
            &input,
            &version_file,
            &dev_path,
            &imports,
            grammar_file.as_deref(),
            &output,
        ),
        Commands::Generate {
            resolve,
            registry,
            packages_root,
            upstream_config,
            version_file,
            config_source,
            inline_config,
            imports,
            output,
        } => commands::run_generate(&GenerateInputs {
            resolve: &resolve,
            registry: &registry,
            packages_root: &packages_root,
            upstream_config: &upstream_config,
            version_file: &version_file,
            config_source: config_source.as_deref(),
            inline_config: inline_config.as_deref(),
            imports: &imports,
            output: &output,
        }),
    }
}
