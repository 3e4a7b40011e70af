//! Deterministic local-name transformation
//!
//! The single automatic naming rule the resolver applies to a repository
//! segment. Four sub-rules in fixed priority, one pass, no backtracking;
//! broader permutation heuristics live in plug-suggest and must never leak
//! in here.

/// Conventional upstream suffix tokens, checked in order.
pub const SUFFIX_TOKENS: &[&str] = &[".nvim", ".vim", ".lua"];

/// Normalized suffix forms a local name may already carry.
pub const NORMALIZED_SUFFIXES: &[&str] = &["-nvim", "-vim", "-lua"];

/// Conventional prefix tokens that pass through untouched.
pub const PREFIX_TOKENS: &[&str] = &["vim-", "nvim-"];

/// Derive the automatic local-name candidate for a repository segment.
///
/// Priority order:
/// 1. trailing suffix token (`.nvim`, `.vim`, `.lua`) becomes its hyphenated
///    normalized form;
/// 2. a name already in normalized-suffix form passes through;
/// 3. a name with a conventional prefix passes through;
/// 4. otherwise hyphens become underscores, then periods become hyphens.
pub fn local_name_candidate(repo: &str) -> String {
    for suffix in SUFFIX_TOKENS {
        if let Some(stem) = repo.strip_suffix(suffix) {
            return format!("{stem}-{}", &suffix[1..]);
        }
    }

    if NORMALIZED_SUFFIXES.iter().any(|s| repo.ends_with(s)) {
        return repo.to_string();
    }

    if PREFIX_TOKENS.iter().any(|p| repo.starts_with(p)) {
        return repo.to_string();
    }

    repo.replace('-', "_").replace('.', "-")
}
