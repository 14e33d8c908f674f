mod calculator;
mod clock;
mod driver;
mod error;
mod models;
mod notifications;

pub use calculator::{
    compute, state_from_millis, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND,
};
pub use clock::{Clock, SystemClock};
pub use driver::{RefreshDriver, RefreshHandle, TICK_INTERVAL};
pub use error::CountdownError;
pub use models::{
    DisplayState, TargetInstant, TimeRemaining, TimeUnit, DEFAULT_TARGET_INSTANT,
};
pub use notifications::{notify_when_elapsed, ElapsedWatcher};
