//! Toast notifications

use crate::client::ConfigClientError;

/// Notice shown after a manual reload
pub const LOADED_MESSAGE: &str = "Loaded configs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }

    /// `ERROR: {message} ({status})` for backend errors, `ERROR: {detail}` otherwise
    pub fn from_error(err: &ConfigClientError) -> Self {
        Self {
            message: format!("ERROR: {}", err),
            kind: NotificationKind::Error,
        }
    }

    pub fn removed(id: &str) -> Self {
        Self::info(format!("Removed {}", id))
    }

    pub fn added(id: Option<&str>) -> Self {
        match id {
            Some(id) => Self::info(format!("Added {}", id)),
            None => Self::info("Added"),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// Errors stay until closed by the user; everything else times out
    pub fn is_persistent(&self) -> bool {
        self.is_error()
    }
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, returning the id used to dismiss it
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
