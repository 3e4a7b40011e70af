//! Mapping-analysis report
//!
//! Markdown with two labeled sections: verified mappings (with a fenced,
//! ready-to-paste override-table fragment in the curated table's exact
//! syntax) and unverified suggestions needing human review. Unresolved
//! identifiers with no candidates at all are listed, never dropped.

use crate::error::Result;
use crate::verify::Suggestion;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct OverrideFragment {
    plugins: BTreeMap<String, String>,
}

/// The full analysis for one run.
#[derive(Debug, Clone)]
pub struct MappingReport {
    pub suggestions: Vec<Suggestion>,
    pub generated_at: DateTime<Utc>,
}

impl MappingReport {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions,
            generated_at: Utc::now(),
        }
    }

    /// Suggestions with a registry-confirmed mapping.
    pub fn verified(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(|s| s.verified.is_some())
    }

    /// Suggestions still needing review.
    pub fn unverified(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(|s| s.verified.is_none())
    }

    /// The override-table fragment containing only verified mappings.
    pub fn override_fragment(&self) -> Result<String> {
        let plugins: BTreeMap<String, String> = self
            .verified()
            .filter_map(|s| {
                s.verified
                    .as_ref()
                    .map(|v| (s.identifier.to_string(), v.clone()))
            })
            .collect();
        Ok(toml::to_string(&OverrideFragment { plugins })?)
    }

    /// Render the Markdown report.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        out.push_str("# Plugin mapping analysis\n\n");
        out.push_str(&format!(
            "Generated {} for {} unresolved identifier(s).\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC"),
            self.suggestions.len()
        ));

        out.push_str("## Verified mappings\n\n");
        let verified: Vec<_> = self.verified().collect();
        if verified.is_empty() {
            out.push_str("None.\n\n");
        } else {
            out.push_str("| Identifier | Local package |\n|---|---|\n");
            for s in &verified {
                // verified() guarantees the mapping is present
                if let Some(package) = &s.verified {
                    out.push_str(&format!("| `{}` | `{}` |\n", s.identifier, package));
                }
            }
            out.push_str(
                "\nReady-to-merge override fragment (append to the curated table after review):\n\n",
            );
            out.push_str("```toml\n");
            out.push_str(&self.override_fragment()?);
            out.push_str("```\n\n");
        }

        out.push_str("## Unverified suggestions\n\n");
        let unverified: Vec<_> = self.unverified().collect();
        if unverified.is_empty() {
            out.push_str("None.\n");
        } else {
            for s in &unverified {
                if s.unverified.is_empty() {
                    out.push_str(&format!("- `{}`: no plausible candidates\n", s.identifier));
                } else {
                    let list: Vec<String> =
                        s.unverified.iter().map(|c| format!("`{c}`")).collect();
                    out.push_str(&format!("- `{}`: {}\n", s.identifier, list.join(", ")));
                }
            }
        }

        Ok(out)
    }
}
