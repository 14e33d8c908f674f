use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::error::CountdownError;
use crate::utils::date::{parse_local_datetime, ParseFailure};

/// Built-in target used when no `targetInstant` is configured.
pub const DEFAULT_TARGET_INSTANT: &str = "2026-01-01T00:00:00";

/// The fixed instant the countdown runs towards, in local wall-clock time.
///
/// Construction is the only way to obtain one, so a malformed target is
/// rejected up front instead of surfacing later as an odd display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetInstant(DateTime<Local>);

impl TargetInstant {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }

    /// Parse a target from configuration text.
    pub fn parse(input: &str) -> Result<Self, CountdownError> {
        parse_local_datetime(input)
            .map(Self)
            .map_err(|failure| rejection(input, failure))
    }

    /// The built-in target, resolved in the local time zone.
    pub fn builtin() -> Result<Self, CountdownError> {
        Self::parse(DEFAULT_TARGET_INSTANT)
    }

    pub fn at(&self) -> DateTime<Local> {
        self.0
    }
}

fn rejection(input: &str, failure: ParseFailure) -> CountdownError {
    let input = input.trim().to_string();
    match failure {
        ParseFailure::Nonexistent => CountdownError::NonexistentLocalTime { input },
        ParseFailure::Unrecognized => CountdownError::InvalidTarget { input },
    }
}

impl FromStr for TargetInstant {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S %:z"))
    }
}

/// One of the four units shown on the countdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Hours => "Hours",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Seconds => "Seconds",
        }
    }
}

/// Time left until the target, split into whole units.
///
/// `hours`, `minutes` and `seconds` are remainders within the next larger
/// unit; `days` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeRemaining {
    pub fn value(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => u64::from(self.hours),
            TimeUnit::Minutes => u64::from(self.minutes),
            TimeUnit::Seconds => u64::from(self.seconds),
        }
    }

    /// Zero-padded to two digits; wider day counts are shown in full.
    pub fn padded(&self, unit: TimeUnit) -> String {
        format!("{:02}", self.value(unit))
    }

    /// Units in display order paired with their values.
    pub fn units(&self) -> [(TimeUnit, u64); 4] {
        TimeUnit::ALL.map(|unit| (unit, self.value(unit)))
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }
}

/// What the display shows: a running countdown or the end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "remaining", rename_all = "snake_case")]
pub enum DisplayState {
    Counting(TimeRemaining),
    Elapsed,
}

impl DisplayState {
    pub fn is_elapsed(&self) -> bool {
        matches!(self, DisplayState::Elapsed)
    }

    pub fn remaining(&self) -> Option<&TimeRemaining> {
        match self {
            DisplayState::Counting(remaining) => Some(remaining),
            DisplayState::Elapsed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_target_is_new_year_2026_local() {
        let target = TargetInstant::builtin().unwrap();
        assert_eq!(
            target.at(),
            Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = TargetInstant::parse("next tuesday").unwrap_err();
        assert!(matches!(
            err,
            CountdownError::InvalidTarget { ref input } if input == "next tuesday"
        ));
    }

    #[test]
    fn dst_gap_is_reported_as_nonexistent() {
        let err = rejection(" 2026-03-08T02:30:00 ", ParseFailure::Nonexistent);
        assert!(matches!(
            err,
            CountdownError::NonexistentLocalTime { ref input } if input == "2026-03-08T02:30:00"
        ));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: TargetInstant = "2026-01-01".parse().unwrap();
        assert_eq!(parsed, TargetInstant::builtin().unwrap());
    }

    #[test]
    fn units_are_in_display_order() {
        let remaining = TimeRemaining {
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
        };
        let labels: Vec<_> = remaining.units().iter().map(|(u, _)| u.label()).collect();
        assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
        let values: Vec<_> = remaining.units().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, [3, 4, 5, 6]);
    }

    #[test]
    fn padded_keeps_wide_day_counts() {
        let remaining = TimeRemaining {
            days: 123,
            hours: 4,
            minutes: 0,
            seconds: 59,
        };
        assert_eq!(remaining.padded(TimeUnit::Days), "123");
        assert_eq!(remaining.padded(TimeUnit::Hours), "04");
        assert_eq!(remaining.padded(TimeUnit::Minutes), "00");
        assert_eq!(remaining.padded(TimeUnit::Seconds), "59");
    }

    #[test]
    fn total_seconds_adds_up_units() {
        let remaining = TimeRemaining {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
        };
        assert_eq!(remaining.total_seconds(), 86_400 + 3_600 + 60 + 1);
    }

    #[test]
    fn display_state_serializes_with_tag() {
        let json = serde_json::to_string(&DisplayState::Elapsed).unwrap();
        assert_eq!(json, r#"{"state":"elapsed"}"#);

        let counting = DisplayState::Counting(TimeRemaining {
            days: 2,
            ..TimeRemaining::default()
        });
        let json = serde_json::to_string(&counting).unwrap();
        assert_eq!(
            json,
            r#"{"state":"counting","remaining":{"days":2,"hours":0,"minutes":0,"seconds":0}}"#
        );
    }
}
