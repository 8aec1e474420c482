//! Timeout helpers used across the crate.
//!
//! Scripts express timeouts in whole seconds; drivers receive a `Duration`.
//! The defaults match what scripts get when they omit the argument.

use std::time::Duration;

/// Default timeout in seconds for tag reads and writes.
pub const DEFAULT_TAG_TIMEOUT_SECS: u64 = 10;

/// Default timeout in seconds for UID-only probes.
pub const DEFAULT_UID_TIMEOUT_SECS: u64 = 5;

/// Convert whole seconds to Duration.
pub fn secs(secs: u64) -> Duration {
    Duration::from_secs(secs)
}

/// Convert a script-supplied second count to a Duration. Negative counts
/// clamp to zero, which drivers treat as a single poll.
pub fn script_secs(secs: i64) -> Duration {
    Duration::from_secs(secs.max(0) as u64)
}

/// Convenience: default read/write timeout as Duration.
pub fn default_tag_timeout() -> Duration {
    secs(DEFAULT_TAG_TIMEOUT_SECS)
}

/// Convenience: default UID probe timeout as Duration.
pub fn default_uid_timeout() -> Duration {
    secs(DEFAULT_UID_TIMEOUT_SECS)
}
