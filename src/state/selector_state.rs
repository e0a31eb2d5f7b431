//! SelectorState - Language Selector Modal State
//!
//! Pure state for the language selector: the open/closed flag plus the
//! two-phase outside-click dismissal gesture. Kept free of GPUI types so the
//! transition rules are unit-testable without a window.

use crate::i18n::Language;

/// Phase of the outside-click dismissal gesture.
///
/// A pointer-down outside the dialog arms the gesture; any subsequent
/// pointer-up completes it and closes the dialog. A pointer-down inside the
/// dialog never arms it, so the release point is irrelevant: the down origin
/// is the sole determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissPhase {
    /// No dismissal gesture in progress
    #[default]
    Idle,
    /// An outside pointer-down was seen; the next pointer-up closes
    PendingClose,
}

/// State for the language selector modal
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorState {
    is_open: bool,
    phase: DismissPhase,
}

impl SelectorState {
    /// A freshly created selector is closed with no gesture in progress
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    /// Trigger activation. Idempotent: opening an open selector is a no-op.
    pub fn open(&mut self) {
        self.is_open = true;
        self.phase = DismissPhase::Idle;
    }

    /// Explicit selection of a language entry. Returns the chosen language
    /// so the caller can notify and navigate; the selector closes regardless.
    pub fn select(&mut self, lang: Language) -> Language {
        self.close();
        lang
    }

    /// A pointer-down was observed. `inside` is whether the event target lies
    /// within the dialog root. Outside downs arm the pending-close gesture;
    /// repeated outside downs before a release collapse into the same state.
    pub fn pointer_down(&mut self, inside: bool) {
        if !self.is_open {
            return;
        }
        if !inside {
            self.phase = DismissPhase::PendingClose;
        }
    }

    /// A pointer-up was observed anywhere. Completes a pending dismissal.
    /// Returns true if this release closed the dialog.
    pub fn pointer_up(&mut self) -> bool {
        if self.is_open && self.phase == DismissPhase::PendingClose {
            self.close();
            return true;
        }
        self.phase = DismissPhase::Idle;
        false
    }

    /// Enter keypress while the dialog has focus. Enter without Shift closes;
    /// Shift+Enter is ignored. Returns true if the dialog closed.
    pub fn key_enter(&mut self, shift: bool) -> bool {
        if self.is_open && !shift {
            self.close();
            return true;
        }
        false
    }

    fn close(&mut self) {
        self.is_open = false;
        self.phase = DismissPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_closed() {
        let state = SelectorState::new();
        assert!(!state.is_open());
        assert_eq!(state.phase(), DismissPhase::Idle);
    }

    #[test]
    fn test_open_idempotent() {
        let mut state = SelectorState::new();
        state.open();
        assert!(state.is_open());
        state.open();
        assert!(state.is_open());
        assert_eq!(state.phase(), DismissPhase::Idle);
    }

    #[test]
    fn test_selection_closes() {
        let mut state = SelectorState::new();
        state.open();
        let chosen = state.select(Language::Fr);
        assert_eq!(chosen, Language::Fr);
        assert!(!state.is_open());
    }

    #[test]
    fn test_outside_down_then_up_closes() {
        let mut state = SelectorState::new();
        state.open();
        state.pointer_down(false);
        assert_eq!(state.phase(), DismissPhase::PendingClose);
        assert!(state.pointer_up());
        assert!(!state.is_open());
    }

    #[test]
    fn test_inside_down_then_up_stays_open() {
        let mut state = SelectorState::new();
        state.open();
        state.pointer_down(true);
        assert_eq!(state.phase(), DismissPhase::Idle);
        assert!(!state.pointer_up());
        assert!(state.is_open());
    }

    #[test]
    fn test_drag_out_then_release_in_closes() {
        // Down outside, up inside: origin-based rule still closes.
        let mut state = SelectorState::new();
        state.open();
        state.pointer_down(false);
        assert!(state.pointer_up());
        assert!(!state.is_open());
    }

    #[test]
    fn test_drag_in_then_release_out_stays_open() {
        let mut state = SelectorState::new();
        state.open();
        state.pointer_down(true);
        assert!(!state.pointer_up());
        assert!(state.is_open());
    }

    #[test]
    fn test_repeated_outside_downs_collapse() {
        let mut state = SelectorState::new();
        state.open();
        state.pointer_down(false);
        state.pointer_down(false);
        state.pointer_down(false);
        assert_eq!(state.phase(), DismissPhase::PendingClose);
        assert!(state.pointer_up());
        // Further releases after the close are no-ops.
        assert!(!state.pointer_up());
        assert!(!state.pointer_up());
        assert_eq!(state.phase(), DismissPhase::Idle);
    }

    #[test]
    fn test_enter_without_shift_closes() {
        let mut state = SelectorState::new();
        state.open();
        assert!(state.key_enter(false));
        assert!(!state.is_open());
    }

    #[test]
    fn test_shift_enter_stays_open() {
        let mut state = SelectorState::new();
        state.open();
        assert!(!state.key_enter(true));
        assert!(state.is_open());
    }

    #[test]
    fn test_gesture_ignored_while_closed() {
        let mut state = SelectorState::new();
        state.pointer_down(false);
        assert_eq!(state.phase(), DismissPhase::Idle);
        assert!(!state.pointer_up());
        assert!(!state.is_open());
    }

    #[test]
    fn test_reopen_resets_gesture() {
        let mut state = SelectorState::new();
        state.open();
        state.pointer_down(false);
        assert!(state.pointer_up());
        state.open();
        assert_eq!(state.phase(), DismissPhase::Idle);
        assert!(state.is_open());
    }
}
