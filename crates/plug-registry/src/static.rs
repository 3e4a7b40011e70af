//! In-memory registry for tests and offline runs

use crate::{Lookup, Registry, Result};
use async_trait::async_trait;
use std::collections::HashSet;

/// Registry backed by a fixed set of known package names.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    names: HashSet<String>,
}

impl StaticRegistry {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty registry: every lookup is NotFound.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Registry for StaticRegistry {
    async fn lookup(&self, name: &str) -> Result<Lookup> {
        if self.names.contains(name) {
            Ok(Lookup::Exists)
        } else {
            Ok(Lookup::NotFound)
        }
    }
}
