// Test fixtures - reusable test data
// Provides consistent instants across all test files

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2026 at midnight, the built-in target
    pub fn new_year_2026() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    /// Returns Dec 31, 2025 at 23:59:58
    pub fn two_seconds_to_midnight() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap()
    }

    /// Returns Dec 30, 2025 at midnight
    pub fn two_days_before() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 12, 30, 0, 0, 0).unwrap()
    }

    /// Returns Jul 1, 2024 at noon, well over a year before the target
    pub fn mid_2024() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
    }
}
