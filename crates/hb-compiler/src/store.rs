//! Owning blacklist collection
//!
//! Keeps the ordered entry list and its compiled matcher in lockstep:
//! every mutation recompiles synchronously, so a reader never observes a
//! matcher that lags the committed entries. Persistence is the host's
//! concern; this type only owns the in-memory list and its uniqueness
//! rule.

use hb_core::types::BlacklistEntry;
use hb_core::CompiledMatcher;

use crate::builder::compile;

/// Error from a blacklist mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An entry with the exact same value already exists.
    /// Uniqueness is case-sensitive exact match.
    #[error("Entry '{0}' already exists")]
    Duplicate(String),
    /// The edit/remove target was not found.
    #[error("No entry '{0}'")]
    NotFound(String),
}

/// Ordered blacklist entry list plus its always-current compiled matcher.
#[derive(Debug, Default)]
pub struct Blacklist {
    entries: Vec<BlacklistEntry>,
    matcher: CompiledMatcher,
}

impl Blacklist {
    /// Create an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a blacklist from persisted entries, compiling immediately.
    pub fn load(entries: Vec<BlacklistEntry>) -> Self {
        let matcher = compile(&entries);
        Self { entries, matcher }
    }

    /// The committed entry list, in insertion order.
    pub fn entries(&self) -> &[BlacklistEntry] {
        &self.entries
    }

    /// The matcher reflecting the latest committed entry set.
    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry, rejecting duplicate values.
    pub fn add(&mut self, entry: BlacklistEntry) -> Result<(), StoreError> {
        if self.entries.iter().any(|e| e.value == entry.value) {
            return Err(StoreError::Duplicate(entry.value));
        }
        self.entries.push(entry);
        self.recompile();
        Ok(())
    }

    /// Replace the entry holding `old_value` with a freshly parsed one.
    /// The replacement keeps the original's position in the list.
    pub fn edit(&mut self, old_value: &str, entry: BlacklistEntry) -> Result<(), StoreError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.value == old_value)
            .ok_or_else(|| StoreError::NotFound(old_value.to_string()))?;

        if entry.value != old_value && self.entries.iter().any(|e| e.value == entry.value) {
            return Err(StoreError::Duplicate(entry.value));
        }

        self.entries[idx] = entry;
        self.recompile();
        Ok(())
    }

    /// Remove the entry holding `value`, returning it.
    pub fn remove(&mut self, value: &str) -> Result<BlacklistEntry, StoreError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.value == value)
            .ok_or_else(|| StoreError::NotFound(value.to_string()))?;

        let removed = self.entries.remove(idx);
        self.recompile();
        Ok(removed)
    }

    /// Replace the whole list, as when storage changes under us.
    pub fn reload(&mut self, entries: Vec<BlacklistEntry>) {
        self.entries = entries;
        self.recompile();
    }

    fn recompile(&mut self) {
        self.matcher = compile(&self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_matcher_in_sync() {
        let mut blacklist = Blacklist::new();
        assert!(!blacklist.matcher().is_blacklisted("https://example.com"));

        blacklist.add(BlacklistEntry::plain("example.com")).unwrap();
        assert!(blacklist.matcher().is_blacklisted("https://example.com"));
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut blacklist = Blacklist::new();
        blacklist.add(BlacklistEntry::plain("example.com")).unwrap();

        let err = blacklist
            .add(BlacklistEntry::plain("example.com"))
            .unwrap_err();
        assert_eq!(err, StoreError::Duplicate("example.com".to_string()));
        assert_eq!(blacklist.len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut blacklist = Blacklist::new();
        blacklist.add(BlacklistEntry::plain("example.com")).unwrap();
        // Different case is a different value as far as uniqueness goes
        blacklist.add(BlacklistEntry::plain("Example.com")).unwrap();
        assert_eq!(blacklist.len(), 2);
    }

    #[test]
    fn test_remove_keeps_matcher_in_sync() {
        let mut blacklist = Blacklist::load(vec![
            BlacklistEntry::plain("a.com"),
            BlacklistEntry::plain("b.com"),
        ]);
        assert!(blacklist.matcher().is_blacklisted("https://a.com"));

        let removed = blacklist.remove("a.com").unwrap();
        assert_eq!(removed.value, "a.com");
        assert!(!blacklist.matcher().is_blacklisted("https://a.com"));
        assert!(blacklist.matcher().is_blacklisted("https://b.com"));
    }

    #[test]
    fn test_remove_missing() {
        let mut blacklist = Blacklist::new();
        let err = blacklist.remove("nope.com").unwrap_err();
        assert_eq!(err, StoreError::NotFound("nope.com".to_string()));
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut blacklist = Blacklist::load(vec![
            BlacklistEntry::plain("a.com"),
            BlacklistEntry::plain("b.com"),
        ]);

        blacklist
            .edit("a.com", BlacklistEntry::plain("c.com"))
            .unwrap();
        assert_eq!(blacklist.entries()[0].value, "c.com");
        assert!(!blacklist.matcher().is_blacklisted("https://a.com"));
        assert!(blacklist.matcher().is_blacklisted("https://c.com"));
    }

    #[test]
    fn test_edit_rejects_duplicate_target() {
        let mut blacklist = Blacklist::load(vec![
            BlacklistEntry::plain("a.com"),
            BlacklistEntry::plain("b.com"),
        ]);

        let err = blacklist
            .edit("a.com", BlacklistEntry::plain("b.com"))
            .unwrap_err();
        assert_eq!(err, StoreError::Duplicate("b.com".to_string()));
    }

    #[test]
    fn test_edit_same_value_changes_kind() {
        // Rewriting an entry to the same value is allowed, e.g. switching a
        // plain entry to the equivalent regex form.
        let mut blacklist = Blacklist::load(vec![BlacklistEntry::plain("ads")]);
        blacklist.edit("ads", BlacklistEntry::regex("ads")).unwrap();
        assert!(blacklist.entries()[0].is_regex);
    }

    #[test]
    fn test_reload_replaces_everything() {
        let mut blacklist = Blacklist::load(vec![BlacklistEntry::plain("a.com")]);
        blacklist.reload(vec![BlacklistEntry::plain("b.com")]);

        assert_eq!(blacklist.len(), 1);
        assert!(!blacklist.matcher().is_blacklisted("https://a.com"));
        assert!(blacklist.matcher().is_blacklisted("https://b.com"));
    }
}
