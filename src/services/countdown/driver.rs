//! Once-per-second refresh of the shared [`DisplayState`] cell.
//!
//! The driver seeds the cell synchronously on start, then recomputes it on a
//! tokio interval. The returned [`RefreshHandle`] owns the tick task; stopping
//! or dropping it closes the cell, and nothing is published after that.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::calculator::compute;
use super::clock::Clock;
use super::error::CountdownError;
use super::models::{DisplayState, TargetInstant};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Writing side of the cell. The tick publishes and `stop` closes under the
/// same lock, so a publish either lands before the close or not at all.
struct Publisher {
    sender: Mutex<Option<watch::Sender<DisplayState>>>,
    published: AtomicU64,
}

impl Publisher {
    fn new(sender: watch::Sender<DisplayState>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
            // The initial state counts as the first publish.
            published: AtomicU64::new(1),
        }
    }

    fn publish(&self, state: DisplayState) -> bool {
        let guard = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(sender) => {
                sender.send_replace(state);
                self.published.fetch_add(1, Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    fn close(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

pub struct RefreshDriver {
    target: TargetInstant,
    clock: Arc<dyn Clock>,
}

impl RefreshDriver {
    pub fn new(target: TargetInstant, clock: Arc<dyn Clock>) -> Self {
        Self { target, clock }
    }

    /// Seed the cell and start ticking on the current tokio runtime.
    pub fn start(self) -> Result<RefreshHandle, CountdownError> {
        let runtime = Handle::try_current().map_err(|_| CountdownError::TimerUnavailable)?;

        let initial = compute(&self.target, self.clock.now());
        let (sender, receiver) = watch::channel(initial);
        let publisher = Arc::new(Publisher::new(sender));

        log::info!(
            "Starting countdown to {} (initial state: {:?})",
            self.target,
            initial
        );

        let task = runtime.spawn(run_ticks(
            self.target,
            self.clock,
            Arc::clone(&publisher),
            initial.is_elapsed(),
        ));

        Ok(RefreshHandle {
            publisher,
            receiver,
            task: Some(task),
        })
    }
}

async fn run_ticks(
    target: TargetInstant,
    clock: Arc<dyn Clock>,
    publisher: Arc<Publisher>,
    mut elapsed: bool,
) {
    let mut interval = time::interval_at(time::Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut warned_backwards = false;

    loop {
        interval.tick().await;

        let mut state = compute(&target, clock.now());
        if elapsed && !state.is_elapsed() {
            // Elapsed is terminal even if the wall clock is stepped back.
            if !warned_backwards {
                log::warn!("Wall clock moved back before {}; staying elapsed", target);
                warned_backwards = true;
            }
            state = DisplayState::Elapsed;
        } else if !elapsed && state.is_elapsed() {
            log::info!("Countdown to {} elapsed", target);
            elapsed = true;
        }

        log::trace!("tick: {:?}", state);
        if !publisher.publish(state) {
            break;
        }
    }
}

/// Owner of a running refresh driver.
///
/// Dropping the handle stops the driver.
pub struct RefreshHandle {
    publisher: Arc<Publisher>,
    receiver: watch::Receiver<DisplayState>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// A reader of the cell. It closes once the driver stops.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.receiver.clone()
    }

    /// The most recently published state.
    pub fn current(&self) -> DisplayState {
        *self.receiver.borrow()
    }

    pub fn publish_count(&self) -> u64 {
        self.publisher.published()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cancel the tick. Idempotent; no publish happens after this returns.
    pub fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        self.publisher.close();
        task.abort();
        log::info!(
            "Countdown driver stopped after {} publishes",
            self.publisher.published()
        );
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
