//! AppEvent - Application Event Enum
//!
//! All events that can be sent from views to the app-level dispatcher.

use gpui::Global;

use crate::state::session_state::SessionStatus;
use crate::state::toast_state::ToastLevel;

/// Application events for view -> app communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Show a transient toast message
    Toast { level: ToastLevel, message: String },

    /// Session status changed
    SessionChanged { status: SessionStatus },

    /// Perform a hard navigation: tear down the window and all in-memory
    /// entities, then reopen at the given path ("/<code>")
    Navigate { path: String },
}

impl AppEvent {
    /// Create a success toast event
    pub fn success(message: impl Into<String>) -> Self {
        Self::Toast {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    /// Create an error toast event
    pub fn error(message: impl Into<String>) -> Self {
        Self::Toast {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    /// Create an info toast event
    pub fn info(message: impl Into<String>) -> Self {
        Self::Toast {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }
}

/// Global handle to the app event channel sender
#[derive(Clone)]
pub struct EventBus {
    tx: flume::Sender<AppEvent>,
}

impl Global for EventBus {}

impl EventBus {
    pub fn new(tx: flume::Sender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the app-level dispatcher. Send failures only occur
    /// during shutdown and are logged, not surfaced.
    pub fn send(&self, event: AppEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::warn!("event bus closed: {err}");
        }
    }
}
