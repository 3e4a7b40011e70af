//! User-config fragment merging
//!
//! Two origins supply user configuration: files scanned from a configured
//! directory tree and inline declarations. Both feed one output set; a
//! logical unit supplied by both origins is a conflict, never a silent
//! preference.

pub mod error;
pub mod fragment;
pub mod inline;
pub mod merge;
pub mod scan;

pub use error::{Error, Result};
pub use fragment::{ConfigFragment, LogicalUnit, Origin};
pub use inline::load_inline;
pub use merge::merge;
pub use scan::scan;
