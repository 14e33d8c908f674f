//! Headless display: one line per state change on a text stream.

use std::io::{self, Write};

use tokio::sync::watch;

use crate::models::settings::Settings;
use crate::services::countdown::{DisplayState, TimeUnit};

/// Render a state as a single line of text.
pub fn render_line(settings: &Settings, state: &DisplayState) -> String {
    match state {
        DisplayState::Counting(remaining) => {
            let units = TimeUnit::ALL
                .iter()
                .map(|unit| format!("{} {}", remaining.padded(*unit), unit.label()))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}: {}", settings.title, units)
        }
        DisplayState::Elapsed => {
            format!("{} {}", settings.elapsed_headline, settings.elapsed_message)
        }
    }
}

pub struct TerminalDisplay<W: Write> {
    settings: Settings,
    out: W,
    last_line: Option<String>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        Self {
            settings,
            out,
            last_line: None,
        }
    }

    /// Write the state if its line differs from the last one written.
    pub fn show(&mut self, state: &DisplayState) -> io::Result<bool> {
        let line = render_line(&self.settings, state);
        if self.last_line.as_deref() == Some(line.as_str()) {
            return Ok(false);
        }

        if self.last_line.is_none() {
            writeln!(self.out, "{}", self.settings.tagline)?;
        }
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        self.last_line = Some(line);
        Ok(true)
    }

    /// Follow the display cell until it closes.
    pub async fn run(mut self, mut states: watch::Receiver<DisplayState>) -> io::Result<W> {
        loop {
            let state = *states.borrow_and_update();
            self.show(&state)?;
            if states.changed().await.is_err() {
                log::debug!("Display cell closed; terminal display exiting");
                return Ok(self.out);
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
