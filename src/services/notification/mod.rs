use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Something that can tell the user the countdown is over.
pub trait ElapsedAlert: Send + 'static {
    fn is_enabled(&self) -> bool;

    fn show_elapsed_alert(&self, headline: &str, message: &str) -> Result<()>;
}

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl ElapsedAlert for NotificationService {
    /// Check if notifications are enabled
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the end-of-countdown alert
    fn show_elapsed_alert(&self, headline: &str, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(headline)
            .body(message)
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(false)
    }
}
