//! Content fingerprinting for cached matchers
//!
//! A consumer without access to the live entry list (the background
//! visited-page listener re-reads persisted entries on every event) keys
//! its cached matcher on this fingerprint and recompiles only when the
//! fingerprint changes.

use std::hash::Hasher;

use twox_hash::XxHash64;

use crate::types::BlacklistEntry;

// Golden ratio
const FINGERPRINT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// 64-bit xxHash fingerprint of an entry list.
///
/// Sensitive to entry values, regex flags, and order, so any committed
/// mutation of the persisted list produces a new fingerprint.
pub fn fingerprint(entries: &[BlacklistEntry]) -> u64 {
    let mut hasher = XxHash64::with_seed(FINGERPRINT_SEED);
    for entry in entries {
        hasher.write(entry.value.as_bytes());
        // Terminator keeps ["ab","c"] and ["a","bc"] distinct
        hasher.write_u8(0xff);
        hasher.write_u8(entry.is_regex as u8);
    }
    hasher.finish()
}
