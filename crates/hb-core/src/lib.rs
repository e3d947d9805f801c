//! HistBlock Core Library
//!
//! This crate provides the core matching engine for the HistBlock history
//! blacklist. A blacklist is authored as an ordered list of entries (plain
//! domains, `*` wildcard patterns, and `/…/` regexes), compiled once by
//! `hb-compiler` into a [`CompiledMatcher`], and queried here with one
//! `(url) -> bool` classification per visited page and per rendered
//! history row.
//!
//! # Modules
//!
//! - `types`: shared entry and parse-result definitions
//! - `url`: permissive hostname/path extraction for the hot path
//! - `matcher`: the compiled matcher and URL classifier
//! - `fingerprint`: entry-list content fingerprint for matcher caching

pub mod fingerprint;
pub mod matcher;
pub mod types;
pub mod url;

// Re-export commonly used types
pub use fingerprint::fingerprint;
pub use matcher::CompiledMatcher;
pub use types::{BlacklistEntry, ParseError, ParseOutcome};
