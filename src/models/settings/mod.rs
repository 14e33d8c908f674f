// Settings module
// Configuration for the countdown display, read from `countdown.toml`

use serde::{Deserialize, Serialize};

use crate::services::countdown::{CountdownError, TargetInstant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Instant to count down to; the built-in target is used when absent.
    #[serde(alias = "target_instant", skip_serializing_if = "Option::is_none")]
    pub target_instant: Option<String>,
    pub title: String,
    pub tagline: String,
    pub footer: String,
    pub elapsed_headline: String,
    pub elapsed_message: String,
    pub notify_on_elapsed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_instant: None,
            title: "Countdown to 2026".to_string(),
            tagline: "Every second counts".to_string(),
            footer: "The future is closer than you think".to_string(),
            elapsed_headline: "🎉 Time's Up! 🎉".to_string(),
            elapsed_message: "Happy New Year!".to_string(),
            notify_on_elapsed: false,
        }
    }
}

impl Settings {
    /// Resolve the configured target, falling back to the built-in one.
    pub fn target(&self) -> Result<TargetInstant, CountdownError> {
        match self.target_instant.as_deref() {
            Some(raw) => TargetInstant::parse(raw),
            None => TargetInstant::builtin(),
        }
    }
}
