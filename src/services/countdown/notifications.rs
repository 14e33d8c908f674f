//! Desktop notification when the countdown reaches its end state.

use tokio::sync::watch;

use super::models::DisplayState;
use crate::services::notification::ElapsedAlert;

/// Detects the Counting -> Elapsed transition in a stream of states.
///
/// A stream that starts out elapsed never fires, and it fires at most once.
#[derive(Debug, Default)]
pub struct ElapsedWatcher {
    seen_counting: bool,
    fired: bool,
}

impl ElapsedWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next state; returns true exactly when the alert should fire.
    pub fn observe(&mut self, state: &DisplayState) -> bool {
        match state {
            DisplayState::Counting(_) => {
                self.seen_counting = true;
                false
            }
            DisplayState::Elapsed if self.seen_counting && !self.fired => {
                self.fired = true;
                true
            }
            DisplayState::Elapsed => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Follow the display cell and raise one alert on elapse.
///
/// Returns when the cell closes or after the alert has been shown.
pub async fn notify_when_elapsed<A: ElapsedAlert>(
    mut states: watch::Receiver<DisplayState>,
    service: A,
    headline: String,
    message: String,
) {
    if !service.is_enabled() {
        return;
    }

    let mut watcher = ElapsedWatcher::new();
    loop {
        let state = *states.borrow_and_update();
        if watcher.observe(&state) {
            log::info!("Countdown elapsed; sending desktop notification");
            // Showing a notification is a blocking call on every platform backend.
            let shown = tokio::task::spawn_blocking(move || {
                service.show_elapsed_alert(&headline, &message)
            })
            .await;
            match shown {
                Ok(Ok(())) => {}
                Ok(Err(err)) => log::warn!("Failed to send elapsed notification: {err:?}"),
                Err(err) => log::warn!("Elapsed notification task failed: {err}"),
            }
            return;
        }

        if states.changed().await.is_err() {
            return;
        }
    }
}
