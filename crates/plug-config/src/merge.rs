//! Conflict-rejecting merge
//!
//! Combines scanned and inline fragments into one set. Overlap on a logical
//! unit fails before any output is emitted; a unit present on one side only
//! passes through byte-for-byte.

use crate::error::{Error, Result};
use crate::fragment::{ConfigFragment, LogicalUnit};
use std::collections::BTreeMap;

/// Merge both origins into one set, keyed and ordered by logical unit.
pub fn merge(
    scanned: Vec<ConfigFragment>,
    inline: Vec<ConfigFragment>,
) -> Result<Vec<ConfigFragment>> {
    let mut merged: BTreeMap<LogicalUnit, ConfigFragment> = BTreeMap::new();

    for fragment in scanned.into_iter().chain(inline) {
        if let Some(existing) = merged.get(&fragment.unit) {
            return Err(Error::Conflict {
                unit: fragment.unit.clone(),
                first: existing.origin,
                second: fragment.origin,
            });
        }
        merged.insert(fragment.unit.clone(), fragment);
    }

    Ok(merged.into_values().collect())
}
