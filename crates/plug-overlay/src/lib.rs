//! Dev-path overlay builder
//!
//! Turns the resolved plugin set into a flat directory of symbolic links
//! under the exact names the plugin manager expects, so externally built
//! packages look like already-present, pinned dependencies.

pub mod builder;
pub mod entry;
pub mod error;

pub use builder::{build, BuildSummary};
pub use entry::{plan, DevPathEntry, OverlayPlan};
pub use error::{Error, Result};
