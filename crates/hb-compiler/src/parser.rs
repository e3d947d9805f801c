//! Entry input parsing
//!
//! Turns one raw line of user-typed text into a structured blacklist
//! entry, rejecting malformed regexes up front. Pure: no side effects,
//! no access to the entry list (duplicate rejection belongs to the
//! owning [`crate::Blacklist`]).

use regex::Regex;

use hb_core::types::{BlacklistEntry, ParseError, ParseOutcome};

/// Parse one raw user-typed pattern.
///
/// Whitespace-only input and the bare delimiter pair `//` produce
/// [`ParseOutcome::Empty`]: the caller has nothing to submit, which is not
/// an error. A string longer than two characters delimited by `/…/` must
/// compile as a regular expression, or the outcome is the user-facing
/// "Invalid Regular Expression". Anything else is taken verbatim as a
/// plain entry; wildcard detection happens at compile time based on the
/// presence of `*`, not here.
pub fn parse_input(raw: &str) -> ParseOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParseOutcome::Empty;
    }

    if trimmed.len() >= 2 && trimmed.starts_with('/') && trimmed.ends_with('/') {
        let candidate = &trimmed[1..trimmed.len() - 1];
        if candidate.is_empty() {
            // Input was exactly "//"
            return ParseOutcome::Empty;
        }
        return match Regex::new(candidate) {
            Ok(_) => ParseOutcome::Entry(BlacklistEntry::regex(candidate)),
            Err(_) => ParseOutcome::Invalid(ParseError::InvalidRegex),
        };
    }

    ParseOutcome::Entry(BlacklistEntry::plain(trimmed))
}
