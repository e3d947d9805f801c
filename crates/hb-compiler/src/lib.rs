//! HistBlock Blacklist Compiler
//!
//! This crate parses raw user blacklist input and compiles the full entry
//! set into the queryable matcher served by `hb-core`.

pub mod builder;
pub mod cache;
pub mod parser;
pub mod store;

pub use builder::{compile, validate_entry};
pub use cache::MatcherCache;
pub use parser::parse_input;
pub use store::{Blacklist, StoreError};
