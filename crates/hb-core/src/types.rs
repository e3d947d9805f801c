//! Shared type definitions for HistBlock
//!
//! These types mirror the persisted entry shape used by the host (an
//! order-preserving JSON array of `{value, isRegex}` objects) and the
//! tagged result of parsing raw user input.

use serde::{Deserialize, Serialize};

// =============================================================================
// Blacklist Entry
// =============================================================================

/// One user-authored blacklist rule.
///
/// For a plain or wildcard entry, `value` is a domain or domain+path
/// pattern possibly containing `*`. For a regex entry, `value` is the
/// regex source without its `/` delimiters.
///
/// Entries are immutable once constructed: an edit replaces the old entry
/// with a newly parsed one. `value` is never empty; blank input is
/// rejected before construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistEntry {
    pub value: String,
    pub is_regex: bool,
}

impl BlacklistEntry {
    /// Create a plain (or wildcard) entry.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_regex: false,
        }
    }

    /// Create a regex entry from delimiter-stripped source.
    pub fn regex(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_regex: true,
        }
    }
}

// =============================================================================
// Parse Results
// =============================================================================

/// Error produced when raw user input fails to parse as an entry.
///
/// Carries the user-facing message shown inline next to the add/edit
/// control. Never used for persisted entries; those degrade at compile
/// time instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The `/…/` form did not compile as a regular expression.
    #[error("Invalid Regular Expression")]
    InvalidRegex,
}

/// Result of parsing one raw line of user input.
///
/// Dispatched by variant, never by probing fields: blank input is not an
/// error, and a bad regex is not an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Input was empty after trimming; there is nothing to submit.
    Empty,
    /// A well-formed entry ready for insertion.
    Entry(BlacklistEntry),
    /// Input was rejected; the error carries the user-facing message.
    Invalid(ParseError),
}

impl ParseOutcome {
    /// Extract the entry, if this outcome produced one.
    pub fn into_entry(self) -> Option<BlacklistEntry> {
        match self {
            ParseOutcome::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}
