//! Transient status message for the host window.

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

impl StatusLevel {
    pub fn color(&self) -> Color32 {
        match self {
            StatusLevel::Info => Color32::GRAY,
            StatusLevel::Warning => Color32::YELLOW,
        }
    }
}

/// Shows the last message for a few seconds and mirrors it to the log.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    message: Option<(String, StatusLevel)>,
    shown_at: Option<Instant>,
}

impl StatusLine {
    pub fn info(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        info!("{}", msg);
        self.set(msg, StatusLevel::Info);
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        warn!("{}", msg);
        self.set(msg, StatusLevel::Warning);
    }

    fn set(&mut self, msg: String, level: StatusLevel) {
        self.message = Some((msg, level));
        self.shown_at = Some(Instant::now());
    }

    pub fn message(&self) -> Option<(&str, StatusLevel)> {
        self.message.as_ref().map(|(msg, level)| (msg.as_str(), *level))
    }

    /// Drop the message once `timeout` has passed.
    pub fn clear_expired(&mut self, timeout: Duration) {
        if self.shown_at.is_some_and(|t| t.elapsed() >= timeout) {
            self.message = None;
            self.shown_at = None;
        }
    }

    pub fn show(&self, ui: &mut Ui) {
        if let Some((msg, level)) = self.message() {
            ui.colored_label(level.color(), msg);
        }
    }
}
