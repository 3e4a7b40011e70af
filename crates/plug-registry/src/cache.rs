//! Lookup cache keyed by content hash
//!
//! Evaluator calls are slow; within one run the same candidate name can be
//! probed by both the resolver and the suggestion engine. The cache key folds
//! in the snapshot reference so entries can never leak across pins. Errors
//! are not cached: a transient evaluator failure should be retried on the
//! next call, not remembered.

use crate::{Lookup, Registry, Result};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Caching wrapper around another registry.
pub struct CachedRegistry<R> {
    inner: R,
    snapshot: String,
    entries: Mutex<HashMap<String, Lookup>>,
}

impl<R: Registry> CachedRegistry<R> {
    pub fn new(inner: R, snapshot: impl Into<String>) -> Self {
        Self {
            inner,
            snapshot: snapshot.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn key(&self, name: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.snapshot.as_bytes());
        hasher.update(b"\0");
        hasher.update(name.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl<R: Registry> Registry for CachedRegistry<R> {
    async fn lookup(&self, name: &str) -> Result<Lookup> {
        let key = self.key(name);

        if let Some(hit) = self.entries.lock().await.get(&key) {
            return Ok(*hit);
        }

        let result = self.inner.lookup(name).await?;
        self.entries.lock().await.insert(key, result);
        Ok(result)
    }
}
