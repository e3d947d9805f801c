//! Compiled matcher and URL classifier
//!
//! This is the hot path - one classification per visited page and per
//! rendered history row. Checks are staged cheapest-first: exact set lookup
//! on the hostname, then the combined hostname regex, and only when
//! path-aware rules exist the combined host+path regex. Path extraction is
//! skipped entirely in the common plain/domain-only case.

use std::collections::HashSet;

use regex::Regex;

use crate::url::{hostname, path};

// =============================================================================
// Compiled Matcher
// =============================================================================

/// Compiled, queryable form of the full blacklist entry set.
///
/// Derived artifact: rebuilt by `hb-compiler` whenever the owning entry
/// list changes, never mutated in place. Recompiling from an equal entry
/// list yields identical classification behavior.
#[derive(Debug, Clone, Default)]
pub struct CompiledMatcher {
    /// Exact hostname matches collected from plain, wildcard-free entries.
    /// Probed case-sensitively against the lowercased extracted hostname.
    pub plain: HashSet<String>,
    /// All domain-scoped wildcard entries as one fully anchored,
    /// case-insensitive alternation. Absent when no such entries exist.
    pub domain: Option<Regex>,
    /// All raw regex entries plus path-scoped wildcard entries, matched
    /// against `hostname + path`. Absent when no such entries exist.
    pub path: Option<Regex>,
    /// Number of persisted entries dropped as invalid during compilation.
    pub dropped: usize,
}

impl CompiledMatcher {
    /// True when no entry contributed a rule.
    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.domain.is_none() && self.path.is_none()
    }

    /// Decide whether `url` is blacklisted.
    ///
    /// Total: malformed input degrades to hostname `""` and path `"/"`,
    /// which matches nothing except a deliberately broad path rule.
    pub fn is_blacklisted(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }

        let host = hostname(url);

        if self.plain.contains(host.as_ref()) {
            return true;
        }

        if let Some(domain) = &self.domain {
            if domain.is_match(&host) {
                return true;
            }
        }

        if let Some(path_re) = &self.path {
            let target = format!("{}{}", host, path(url));
            return path_re.is_match(&target);
        }

        false
    }
}
