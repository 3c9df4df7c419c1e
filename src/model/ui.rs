//! UI state - notices and busy flags

use std::time::{Duration, Instant};

/// How long a notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A toast message that auto-expires
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>, duration: Duration) -> Self {
        Self {
            level,
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this notice has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Most recent notice, if any
    pub notice: Option<Notice>,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing any previous one
    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice::new(level, text, NOTICE_DURATION));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.notify(NoticeLevel::Info, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.notify(NoticeLevel::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(NoticeLevel::Error, text);
    }

    /// The current notice unless it has expired
    pub fn active_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired())
    }

    /// Check if the UI is busy (loading or saving)
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }
}
