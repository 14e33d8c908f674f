//! Time-remaining arithmetic.
//!
//! Everything here is pure: the same target and "now" always give the same
//! [`DisplayState`].

use chrono::{DateTime, Local};

use super::models::{DisplayState, TargetInstant, TimeRemaining};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Compute what the display should show at `now`.
///
/// Both instants are floored to whole milliseconds before subtracting, so a
/// target still a fraction of a millisecond ahead counts as one millisecond.
pub fn compute(target: &TargetInstant, now: DateTime<Local>) -> DisplayState {
    let delta = target.at().timestamp_millis() - now.timestamp_millis();
    state_from_millis(delta)
}

/// Split a signed millisecond delta into whole units, truncating.
///
/// A delta of zero or less is elapsed.
pub fn state_from_millis(delta: i64) -> DisplayState {
    if delta <= 0 {
        return DisplayState::Elapsed;
    }

    // delta > 0, so every quotient below is non-negative and the casts are lossless.
    DisplayState::Counting(TimeRemaining {
        days: (delta / MILLIS_PER_DAY) as u64,
        hours: ((delta % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u32,
        minutes: ((delta % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32,
        seconds: ((delta % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32,
    })
}
