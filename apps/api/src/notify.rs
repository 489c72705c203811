//! Notification collaborator: user-facing success/error messages.
//!
//! Fire-and-forget. Nothing in the core reads a result back from a notifier.

use std::sync::Mutex;

use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: &str, message: &str) -> Self {
        Notice {
            level: NoticeLevel::Success,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.to_string(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Emits notices as log events.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(title = %notice.title, "{}", notice.message),
            NoticeLevel::Error => error!(title = %notice.title, "{}", notice.message),
        }
    }
}

/// Keeps every notice in memory, in order.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
