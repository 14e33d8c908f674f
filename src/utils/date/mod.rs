// Date utility functions
// Parsing of user-supplied instants in local wall-clock time

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Why text could not be turned into an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Well-formed, but skipped by a DST transition in the zone.
    Nonexistent,
    Unrecognized,
}

/// Parse a wall-clock date/time without an offset. A bare date means midnight.
pub fn parse_naive_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Place a wall-clock time in `tz`. A time repeated by a DST fold resolves to
/// its earlier occurrence; a time inside a DST gap has no instant.
pub fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => Some(at),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Parse either a wall-clock time in `tz` or an RFC 3339 timestamp with offset.
pub fn parse_datetime_in<Tz: TimeZone>(
    input: &str,
    tz: &Tz,
) -> Result<DateTime<Tz>, ParseFailure> {
    let input = input.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.with_timezone(tz));
    }

    let naive = parse_naive_datetime(input).ok_or(ParseFailure::Unrecognized)?;
    resolve_in(tz, naive).ok_or(ParseFailure::Nonexistent)
}

/// [`parse_datetime_in`] for the host's local zone.
pub fn parse_local_datetime(input: &str) -> Result<DateTime<Local>, ParseFailure> {
    parse_datetime_in(input, &Local)
}
