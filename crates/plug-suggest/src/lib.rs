//! Candidate mapping suggestion and verification
//!
//! For identifiers the resolver could not map, derives ranked candidate
//! local names from broader permutation heuristics, verifies them against
//! the package registry on a best-effort basis, and renders a reviewable
//! mapping-analysis report with a ready-to-merge override fragment.
//!
//! These heuristics are deliberately separate from the resolver's single
//! deterministic transform: improving them must never change how an
//! already-resolved name resolves.

pub mod candidates;
pub mod error;
pub mod report;
pub mod verify;

pub use candidates::candidates;
pub use error::{Error, Result};
pub use report::MappingReport;
pub use verify::{analyze, Suggestion};
