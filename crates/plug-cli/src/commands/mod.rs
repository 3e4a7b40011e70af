//! Command implementations for plug-cli

pub mod generate;
pub mod overlay;
pub mod patch;
pub mod pipeline;
pub mod resolve;
pub mod suggest;

pub use generate::run_generate;
pub use overlay::run_overlay;
pub use patch::run_patch;
pub use resolve::run_resolve;
pub use suggest::run_suggest;
