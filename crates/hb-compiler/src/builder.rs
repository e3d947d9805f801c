//! Matcher compilation
//!
//! Folds the full entry list into a [`CompiledMatcher`]. Total and
//! deterministic: a persisted entry that no longer compiles (edited
//! externally, or written by an older build) is dropped with a warning
//! instead of failing the whole build.

use log::warn;
use regex::{escape, Regex, RegexBuilder};

use hb_core::types::BlacklistEntry;
use hb_core::CompiledMatcher;

/// Compile the current entry set into one queryable matcher.
///
/// Entries split three ways: raw regexes and path-scoped wildcards feed
/// the host+path family, domain-scoped wildcards feed the fully anchored
/// hostname family, everything else lands in the exact-match set.
pub fn compile(entries: &[BlacklistEntry]) -> CompiledMatcher {
    let mut matcher = CompiledMatcher::default();
    let mut domain_sources: Vec<String> = Vec::new();
    let mut path_sources: Vec<String> = Vec::new();

    for entry in entries {
        if entry.is_regex {
            // Validate each source on its own so one bad entry cannot
            // poison the combined alternation.
            match Regex::new(&entry.value) {
                Ok(_) => path_sources.push(format!("({})", entry.value)),
                Err(e) => {
                    matcher.dropped += 1;
                    warn!("dropping invalid regex entry '{}': {}", entry.value, e);
                }
            }
        } else if entry.value.contains('*') {
            if entry.value.contains('/') {
                path_sources.push(expand_path_wildcard(&entry.value));
            } else {
                domain_sources.push(format!("^{}$", expand_wildcards(&entry.value)));
            }
        } else {
            matcher.plain.insert(entry.value.clone());
        }
    }

    matcher.domain = build_combined(&domain_sources, "domain");
    matcher.path = build_combined(&path_sources, "path");
    matcher
}

/// Check whether a persisted entry would survive compilation.
/// Returns the regex engine's message for an entry that would be dropped.
pub fn validate_entry(entry: &BlacklistEntry) -> Result<(), String> {
    if entry.is_regex {
        Regex::new(&entry.value)
            .map(|_| ())
            .map_err(|e| e.to_string())
    } else {
        Ok(())
    }
}

/// Escape regex metacharacters, expanding each `*` to `.*`.
///
/// `*` matches any sequence including the empty one, across `/` as well.
fn expand_wildcards(value: &str) -> String {
    value
        .split('*')
        .map(escape)
        .collect::<Vec<_>>()
        .join(".*")
}

/// Compile a path-scoped wildcard (a non-regex entry containing `/`).
///
/// A trailing `/*` means "this page and everything under it": the
/// compiled alternative accepts the bare base or any `/`-suffixed
/// continuation. Other shapes stay prefix-anchored with an open end.
fn expand_path_wildcard(value: &str) -> String {
    if let Some(base) = value.strip_suffix("/*") {
        format!("^{}(/.*)?$", expand_wildcards(base))
    } else {
        format!("^{}", expand_wildcards(value))
    }
}

/// Join sources into one case-insensitive alternation.
fn build_combined(sources: &[String], family: &str) -> Option<Regex> {
    if sources.is_empty() {
        return None;
    }
    match RegexBuilder::new(&sources.join("|"))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            // Every source was validated or produced by escaping, so this
            // only fires on engine limits such as compiled size.
            warn!("failed to build combined {} regex: {}", family, e);
            None
        }
    }
}
