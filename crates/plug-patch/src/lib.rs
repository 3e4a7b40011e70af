//! Anchored upstream-config patching
//!
//! Rewrites the upstream plugin-manager bootstrap by exact-substring
//! substitution. Deliberately brittle: when upstream moves an anchor the
//! patch must fail loudly instead of producing a half-applied config.

pub mod anchor;
pub mod error;
pub mod upstream;

pub use anchor::{apply_all, AnchorPatch};
pub use error::{Error, Result};
pub use upstream::{patch_upstream, InjectionInputs, CHECKER_ANCHOR, SPEC_ANCHOR};
