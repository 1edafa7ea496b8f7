//! Utility functions

use chrono::Utc;

/// Current wall-clock time as unix seconds.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}
