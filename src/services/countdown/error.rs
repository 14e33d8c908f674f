use thiserror::Error;

/// Failures that stop the countdown from being set up.
#[derive(Debug, Error)]
pub enum CountdownError {
    #[error("unrecognized target instant {input:?} (expected e.g. 2026-01-01T00:00:00)")]
    InvalidTarget { input: String },

    #[error("target instant {input:?} does not exist in the local time zone")]
    NonexistentLocalTime { input: String },

    #[error("system clock is unavailable: {0}")]
    ClockUnavailable(String),

    #[error("no timer available: the refresh driver must be started inside a tokio runtime")]
    TimerUnavailable,
}
