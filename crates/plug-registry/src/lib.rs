//! Package registry lookup primitive for pluglink
//!
//! Answers one question: does a candidate local package name exist in the
//! pinned registry snapshot? The production backend shells out to the build
//! system's evaluator in read-only mode; a static in-memory backend serves
//! tests and offline runs.

pub mod cache;
pub mod error;
pub mod eval;
pub mod r#static;

pub use cache::CachedRegistry;
pub use error::{Error, Result};
pub use eval::{EvalConfig, EvalRegistry};
pub use r#static::StaticRegistry;

use async_trait::async_trait;

/// Outcome of a registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Exists,
    NotFound,
}

/// Read-only existence query against the package registry.
///
/// Implementations must be side-effect free: a lookup may spawn a sandboxed
/// evaluator process but never mutates the registry or the filesystem.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Check whether `name` exists in the registry snapshot.
    ///
    /// Transport failures (timeout, evaluator unavailable) are `Err`; callers
    /// decide whether that degrades or aborts.
    async fn lookup(&self, name: &str) -> Result<Lookup>;
}
