//! Time utilities for SIN records.
//!
//! Creation timestamps are Unix epoch seconds (i64). Records never read
//! the clock themselves; callers pass `now_secs()` or a stored value.

/// Return the current time as seconds since Unix epoch.
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Convert epoch seconds to an RFC 3339 string.
///
/// Out-of-range values render as the epoch.
pub fn secs_to_rfc3339(secs: i64) -> String {
    let dt = chrono::DateTime::from_timestamp(secs, 0).unwrap_or(chrono::DateTime::UNIX_EPOCH);
    dt.to_rfc3339()
}
