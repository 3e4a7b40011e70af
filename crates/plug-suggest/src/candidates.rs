//! Candidate name permutations
//!
//! Broader than the resolver's deterministic transform: every plausible
//! suffix, prefix and separator permutation, ranked by how often the
//! transformation holds in the registry's naming practice. Duplicates keep
//! their first (best) rank.

use plug_resolve::{local_name_candidate, PluginIdentifier};

/// Derive ranked, deduplicated candidate local names for an identifier.
pub fn candidates(id: &PluginIdentifier) -> Vec<String> {
    let repo = id.repo();
    let mut ranked: Vec<String> = Vec::new();

    // The deterministic transform first: it is the convention most names
    // follow, even when the registry snapshot did not confirm it.
    push(&mut ranked, local_name_candidate(repo));

    // Separator permutations over the full segment.
    push(&mut ranked, repo.replace('.', "-"));
    push(&mut ranked, repo.replace('.', "_"));
    push(&mut ranked, repo.replace('-', "_").replace('.', "_"));

    // Suffix handling: strip a conventional suffix entirely, or append the
    // normalized one to a name that lacks any.
    for suffix in [".nvim", ".vim", ".lua"] {
        if let Some(stem) = repo.strip_suffix(suffix) {
            push(&mut ranked, stem.to_string());
            push(&mut ranked, stem.replace('-', "_"));
        }
    }
    if !repo.contains('.') && !repo.ends_with("-nvim") {
        push(&mut ranked, format!("{repo}-nvim"));
    }

    // Prefix handling.
    if let Some(stripped) = repo.strip_prefix("nvim-") {
        push(&mut ranked, stripped.to_string());
        push(&mut ranked, format!("{stripped}-nvim"));
    }
    if let Some(stripped) = repo.strip_prefix("vim-") {
        push(&mut ranked, stripped.to_string());
    }

    // Case folds of everything gathered so far.
    for name in ranked.clone() {
        push(&mut ranked, name.to_lowercase());
    }

    // The raw segment itself, last.
    push(&mut ranked, repo.to_string());

    ranked
}

fn push(ranked: &mut Vec<String>, name: String) {
    if !name.is_empty() && !ranked.contains(&name) {
        ranked.push(name);
    }
}
