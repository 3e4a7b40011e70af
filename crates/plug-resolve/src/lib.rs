//! Identifier normalization and local-package resolution
//!
//! Maps upstream plugin identifiers (`owner/repo` coordinates) to buildable
//! local package names, consulting curated and generated override tables
//! before falling back to a single deterministic naming transform checked
//! against the package registry.

pub mod alias;
pub mod error;
pub mod feed;
pub mod ident;
pub mod overrides;
pub mod resolver;
pub mod transform;

pub use alias::AliasTable;
pub use error::{Error, Result};
pub use feed::{PluginRecord, load_records};
pub use ident::PluginIdentifier;
pub use overrides::{MultiModuleEntry, OverrideTables};
pub use resolver::{ResolutionMethod, ResolvedPlugin, Resolver};
pub use transform::local_name_candidate;
