//! Fingerprint-keyed matcher cache
//!
//! For consumers that re-read the persisted entry list on every invocation
//! and must not pay a recompile per classification: the background
//! visited-page listener runs in its own execution context with no access
//! to the live [`crate::Blacklist`], so it keys a cached matcher on the
//! content fingerprint of whatever it read from storage.

use log::debug;

use hb_core::types::BlacklistEntry;
use hb_core::{fingerprint, CompiledMatcher};

use crate::builder::compile;

/// Caches the last compiled matcher, keyed by entry-list fingerprint.
#[derive(Debug, Default)]
pub struct MatcherCache {
    key: Option<u64>,
    matcher: CompiledMatcher,
}

impl MatcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a matcher for `entries`, recompiling only when their
    /// fingerprint differs from the cached one.
    pub fn matcher_for(&mut self, entries: &[BlacklistEntry]) -> &CompiledMatcher {
        let key = fingerprint(entries);
        if self.key != Some(key) {
            debug!(
                "recompiling matcher for {} entries (fingerprint {:016x})",
                entries.len(),
                key
            );
            self.matcher = compile(entries);
            self.key = Some(key);
        }
        &self.matcher
    }

    /// The fingerprint of the cached matcher, if one was compiled.
    pub fn cached_fingerprint(&self) -> Option<u64> {
        self.key
    }

    /// Drop the cached matcher, forcing recompilation on next use.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.matcher = CompiledMatcher::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_compiles() {
        let mut cache = MatcherCache::new();
        assert_eq!(cache.cached_fingerprint(), None);

        let entries = vec![BlacklistEntry::plain("example.com")];
        assert!(cache.matcher_for(&entries).is_blacklisted("https://example.com"));
        assert!(cache.cached_fingerprint().is_some());
    }

    #[test]
    fn test_unchanged_list_reuses_cache() {
        let mut cache = MatcherCache::new();
        let entries = vec![BlacklistEntry::plain("example.com")];

        cache.matcher_for(&entries);
        let key = cache.cached_fingerprint();
        // Same content in a fresh allocation must not recompile
        cache.matcher_for(&entries.clone());
        assert_eq!(cache.cached_fingerprint(), key);
    }

    #[test]
    fn test_changed_list_recompiles() {
        let mut cache = MatcherCache::new();
        let before = vec![BlacklistEntry::plain("a.com")];
        let after = vec![
            BlacklistEntry::plain("a.com"),
            BlacklistEntry::plain("b.com"),
        ];

        assert!(!cache.matcher_for(&before).is_blacklisted("https://b.com"));
        let key = cache.cached_fingerprint();

        assert!(cache.matcher_for(&after).is_blacklisted("https://b.com"));
        assert_ne!(cache.cached_fingerprint(), key);
    }

    #[test]
    fn test_invalidate() {
        let mut cache = MatcherCache::new();
        let entries = vec![BlacklistEntry::plain("a.com")];
        cache.matcher_for(&entries);

        cache.invalidate();
        assert_eq!(cache.cached_fingerprint(), None);
        // Next use compiles again and answers correctly
        assert!(cache.matcher_for(&entries).is_blacklisted("https://a.com"));
    }
}
