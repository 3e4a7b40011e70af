//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pluglink - package upstream editor plugins into a locally resolvable,
/// declaratively-built configuration tree
#[derive(Parser, Debug)]
#[command(name = "pluglink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inputs shared by every command that resolves plugin identifiers
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Plugin record feed (JSON array emitted by the scanner)
    #[arg(long)]
    pub feed: PathBuf,

    /// Hand-curated override table (TOML)
    #[arg(long)]
    pub overrides: PathBuf,

    /// Machine-generated override table pending review (TOML)
    #[arg(long)]
    pub generated_overrides: Option<PathBuf>,

    /// Maximum concurrent resolution workers
    #[arg(long, default_value_t = 8)]
    pub jobs: usize,
}

/// Registry lookup configuration
#[derive(Args, Debug, Clone)]
pub struct RegistryArgs {
    /// Pinned registry snapshot reference
    #[arg(long, default_value = "nixpkgs")]
    pub snapshot: String,

    /// Attribute set the local package names live under
    #[arg(long, default_value = "vimPlugins")]
    pub attr_prefix: String,

    /// Per-lookup evaluator timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub eval_timeout: u64,

    /// Skip all registry lookups (no automatic resolution or verification)
    #[arg(long)]
    pub offline: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the plugin feed and print the resolution table
    Resolve {
        #[command(flatten)]
        resolve: ResolveArgs,

        #[command(flatten)]
        registry: RegistryArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Analyze unresolved identifiers and write the mapping report
    ///
    /// Writes a Markdown report with verified mappings and unverified
    /// suggestions, and optionally the generated override-table fragment.
    Suggest {
        #[command(flatten)]
        resolve: ResolveArgs,

        #[command(flatten)]
        registry: RegistryArgs,

        /// Where to write the Markdown mapping-analysis report
        #[arg(long)]
        report: PathBuf,

        /// Where to write the verified-mappings override fragment
        #[arg(long)]
        fragment: Option<PathBuf>,
    },

    /// Build the dev-path overlay of symbolic links
    Overlay {
        #[command(flatten)]
        resolve: ResolveArgs,

        #[command(flatten)]
        registry: RegistryArgs,

        /// Directory the build system materializes local packages under
        #[arg(long)]
        packages_root: PathBuf,

        /// Overlay output directory
        #[arg(long)]
        output: PathBuf,
    },

    /// Patch the upstream plugin-manager bootstrap
    Patch {
        /// Upstream configuration artifact to patch
        #[arg(long)]
        input: PathBuf,

        /// File holding the upstream version/commit tag
        #[arg(long)]
        version_file: PathBuf,

        /// Overlay path to wire in as the dev path
        #[arg(long)]
        dev_path: PathBuf,

        /// Locally-managed plugin-group import (repeatable)
        #[arg(long = "import")]
        imports: Vec<String>,

        /// File holding the parser/grammar configuration block
        #[arg(long)]
        grammar_file: Option<PathBuf>,

        /// Where to write the patched configuration
        #[arg(long)]
        output: PathBuf,
    },

    /// Run the full pipeline: resolve, overlay, patch, merge
    Generate {
        #[command(flatten)]
        resolve: ResolveArgs,

        #[command(flatten)]
        registry: RegistryArgs,

        /// Directory the build system materializes local packages under
        #[arg(long)]
        packages_root: PathBuf,

        /// Upstream configuration artifact to patch
        #[arg(long)]
        upstream_config: PathBuf,

        /// File holding the upstream version/commit tag
        #[arg(long)]
        version_file: PathBuf,

        /// User config source tree to scan (optional)
        #[arg(long)]
        config_source: Option<PathBuf>,

        /// Inline config declarations (TOML, optional)
        #[arg(long)]
        inline_config: Option<PathBuf>,

        /// Locally-managed plugin-group import (repeatable)
        #[arg(long = "import")]
        imports: Vec<String>,

        /// Output directory for the generated configuration tree
        #[arg(long)]
        output: PathBuf,
    },
}
