//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management. Rebuilt wholesale on a hard navigation, so nothing held here
//! survives a reload.

use gpui::{App, AppContext, Entity, Global};

use crate::i18n::Language;
use crate::state::i18n_state::I18nState;
use crate::state::session_state::SessionState;
use crate::state::toast_state::ToastState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Session context state
    pub session: Entity<SessionState>,
    /// Toast notification queue
    pub toasts: Entity<ToastState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities for a window rooted at the given language
    pub fn init(language: Language, cx: &mut App) -> Self {
        Self {
            session: cx.new(|_| SessionState::default()),
            toasts: cx.new(|_| ToastState::default()),
            i18n: cx.new(|_| I18nState::new(language)),
        }
    }
}
