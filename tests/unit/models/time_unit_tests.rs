// Unit tests for the display units
// Labels and padding as shown on both displays

use countdown_timer::services::countdown::{TimeRemaining, TimeUnit};
use test_case::test_case;

#[test_case(TimeUnit::Days, "Days")]
#[test_case(TimeUnit::Hours, "Hours")]
#[test_case(TimeUnit::Minutes, "Minutes")]
#[test_case(TimeUnit::Seconds, "Seconds")]
fn test_unit_labels(unit: TimeUnit, label: &str) {
    assert_eq!(unit.label(), label);
}

#[test_case(0, "00")]
#[test_case(7, "07")]
#[test_case(42, "42")]
#[test_case(365, "365")]
fn test_days_are_padded_to_two_digits(days: u64, expected: &str) {
    let remaining = TimeRemaining {
        days,
        ..TimeRemaining::default()
    };
    assert_eq!(remaining.padded(TimeUnit::Days), expected);
}

#[test]
fn test_units_cover_every_field_once() {
    let remaining = TimeRemaining {
        days: 1,
        hours: 2,
        minutes: 3,
        seconds: 4,
    };
    let total: u64 = remaining.units().iter().map(|(_, value)| value).sum();
    assert_eq!(total, 10);
    assert_eq!(remaining.units().len(), TimeUnit::ALL.len());
}
