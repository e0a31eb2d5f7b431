//! AppShell - Composition Root
//!
//! Wraps the active page with the cross-cutting providers: the session
//! context (through the global entity handles) and the single toast surface.
//! The shell is a composition wrapper, not a state machine; failures below
//! it propagate to the hosting environment.

use gpui::{
    div, prelude::*, AnyView, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::toast::ToastSurface;
use crate::theme::colors::ConverseColors;

/// Application shell wrapping every page
pub struct AppShell {
    entities: AppEntities,
    page: AnyView,
}

impl AppShell {
    /// Create the shell around a concrete page view. The entities passed in
    /// are the session scope for the entire page subtree.
    pub fn new(entities: AppEntities, page: AnyView, cx: &mut Context<Self>) -> Self {
        // The shell owns the toast surface: re-render it when the queue moves
        cx.observe(&entities.toasts, |_this, _, cx| cx.notify())
            .detach();

        Self { entities, page }
    }
}

impl Render for AppShell {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .relative()
            .bg(ConverseColors::background())
            .child(self.page.clone())
            .child(ToastSurface::new(self.entities.clone()))
    }
}
