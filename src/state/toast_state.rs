//! ToastState - Transient Notification Queue
//!
//! Bounded queue of transient messages rendered by the shell's single toast
//! surface. Any descendant pushes through the shared entity; capacity
//! eviction drops the oldest entry.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Toast severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn color(&self) -> gpui::Rgba {
        match self {
            ToastLevel::Success => gpui::rgba(0x22c55eff), // Green
            ToastLevel::Error => gpui::rgba(0xef4444ff),   // Red
            ToastLevel::Info => gpui::rgba(0x3b82f6ff),    // Blue
        }
    }
}

/// A single toast entry
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for the toast queue
#[derive(Debug)]
pub struct ToastState {
    entries: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl ToastState {
    /// Create a new toast queue with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a toast, evicting the oldest entry when at capacity.
    /// Returns the id assigned to the new toast.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Toast {
            id,
            level,
            message: message.into(),
            timestamp: Local::now(),
        });
        id
    }

    /// Dismiss a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut state = ToastState::new(3);
        let id = state.push(ToastLevel::Info, "hello");
        assert_eq!(state.len(), 1);
        state.dismiss(id);
        assert!(state.is_empty());
    }

    #[test]
    fn test_capacity_eviction() {
        let mut state = ToastState::new(2);
        state.push(ToastLevel::Info, "one");
        state.push(ToastLevel::Info, "two");
        state.push(ToastLevel::Info, "three");
        assert_eq!(state.len(), 2);
        let messages: Vec<_> = state.entries().map(|t| t.message.clone()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut state = ToastState::new(2);
        state.push(ToastLevel::Error, "boom");
        state.dismiss(999);
        assert_eq!(state.len(), 1);
    }
}
