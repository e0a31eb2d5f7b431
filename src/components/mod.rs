//! Components - Reusable UI Components
//!
//! Pure UI components plus the stateful language selector.

pub mod language_selector;
pub mod primitives;
pub mod toast;
