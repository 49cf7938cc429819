//! Shared UI chrome state: the transient notice banner.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A dismissible notification shown by the notice host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Shared UI state. Only one notice is shown at a time; a newer one
/// replaces whatever is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub notice: Option<Notice>,
}

impl UiState {
    /// Show a success notice, replacing any current one.
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    /// Show an error notice, replacing any current one.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    /// Clear the notice banner.
    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}
