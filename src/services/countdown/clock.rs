use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};

use super::error::CountdownError;

/// Source of the current wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock(());

impl SystemClock {
    /// Check the system clock is usable before handing it out.
    pub fn new() -> Result<Self, CountdownError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| CountdownError::ClockUnavailable(err.to_string()))?;
        Ok(Self(()))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
