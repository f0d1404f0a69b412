//! TTL Policy
//!
//! Pure helpers for computing expiration timestamps. An entry is live while
//! its expiration timestamp is at or after the current time.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Computes the expiration timestamp for an entry touched at `now_ms`.
pub fn expiration_from(now_ms: u64, idle_ttl_secs: u64) -> u64 {
    now_ms + idle_ttl_secs * 1000
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_from() {
        assert_eq!(expiration_from(1_000, 5), 6_000);
        assert_eq!(expiration_from(0, 300), 300_000);
    }

    #[test]
    fn test_expiration_from_zero_idle() {
        // A zero idle window expires at the touch instant itself
        assert_eq!(expiration_from(42, 0), 42);
    }

    #[test]
    fn test_current_timestamp_advances() {
        let a = current_timestamp_ms();
        let b = current_timestamp_ms();
        assert!(b >= a);
    }
}
