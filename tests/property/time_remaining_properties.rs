// Property-based tests for the time-remaining calculation
// Exercises compute() with random instants around a fixed target

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::Duration;
use countdown_timer::services::countdown::{
    compute, state_from_millis, DisplayState, TargetInstant, MILLIS_PER_DAY,
};
use fixtures::dates;
use proptest::prelude::*;

// About 30 years either side of the target.
const RANGE_MS: i64 = 30 * 366 * MILLIS_PER_DAY;

fn target() -> TargetInstant {
    TargetInstant::new(dates::new_year_2026())
}

fn total_millis(state: &DisplayState) -> Option<i64> {
    state.remaining().map(|r| r.total_seconds() as i64 * 1_000)
}

proptest! {
    /// Property: before the target every unit stays within its range
    #[test]
    fn prop_counting_units_are_bounded(before in 1..RANGE_MS) {
        let now = target().at() - Duration::milliseconds(before);
        match compute(&target(), now) {
            DisplayState::Counting(r) => {
                prop_assert!(r.hours <= 23);
                prop_assert!(r.minutes <= 59);
                prop_assert!(r.seconds <= 59);
                prop_assert_eq!(r.total_seconds() as i64, before / 1_000);
            }
            DisplayState::Elapsed => prop_assert!(false, "elapsed {}ms before target", before),
        }
    }

    /// Property: at or after the target the display is elapsed
    #[test]
    fn prop_at_or_after_target_is_elapsed(after in 0..RANGE_MS) {
        let now = target().at() + Duration::milliseconds(after);
        prop_assert_eq!(compute(&target(), now), DisplayState::Elapsed);
    }

    /// Property: the same inputs always give the same output
    #[test]
    fn prop_compute_is_idempotent(offset in -RANGE_MS..RANGE_MS) {
        let now = target().at() + Duration::milliseconds(offset);
        prop_assert_eq!(compute(&target(), now), compute(&target(), now));
    }

    /// Property: remaining time never grows as now moves forward, and a
    /// whole-second step always shrinks it
    #[test]
    fn prop_remaining_decreases_with_time(before in 1..RANGE_MS, step in 1..(10 * MILLIS_PER_DAY)) {
        let earlier = compute(&target(), target().at() - Duration::milliseconds(before));
        let start = target().at() - Duration::milliseconds(before);
        let later = compute(&target(), start + Duration::milliseconds(step));

        let earlier_ms = total_millis(&earlier).unwrap();
        match total_millis(&later) {
            Some(later_ms) => {
                prop_assert!(later_ms <= earlier_ms);
                if step >= 1_000 {
                    prop_assert!(later_ms < earlier_ms);
                }
            }
            None => prop_assert!(later.is_elapsed()),
        }
    }

    /// Property: the millisecond split never rounds up
    #[test]
    fn prop_split_truncates(delta in 1..RANGE_MS) {
        let state = state_from_millis(delta);
        let remaining = state.remaining().unwrap();
        let shown_ms = remaining.total_seconds() as i64 * 1_000;
        prop_assert!(shown_ms <= delta);
        prop_assert!(delta - shown_ms < 1_000);
    }
}
