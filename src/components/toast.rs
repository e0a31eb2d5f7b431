//! Toast Surface Component
//!
//! Renders the shared toast queue in the top-right corner of the window.
//! Exactly one surface exists per window, owned by the app shell; any view
//! pushes messages through the shared toast entity. Toasts dismiss on click.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::toast_state::Toast;
use crate::theme::colors::ConverseColors;

/// The single notification surface rendered by the shell
#[derive(IntoElement)]
pub struct ToastSurface {
    entities: AppEntities,
}

impl ToastSurface {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn render_toast(&self, toast: Toast) -> impl IntoElement {
        let entities = self.entities.clone();
        let id = toast.id;

        div()
            .id(SharedString::from(format!("toast-{id}")))
            .px_4()
            .py_3()
            .min_w(px(220.0))
            .max_w(px(360.0))
            .bg(ConverseColors::toast_bg())
            .rounded_md()
            .shadow_lg()
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.toasts.update(cx, |toasts, cx| {
                    toasts.dismiss(id);
                    cx.notify();
                });
            })
            .child(
                div()
                    .size(px(8.0))
                    .rounded_full()
                    .bg(toast.level.color()),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(ConverseColors::text_light())
                    .child(toast.message),
            )
    }
}

impl RenderOnce for ToastSurface {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let toasts: Vec<Toast> = self.entities.toasts.read(cx).entries().cloned().collect();

        div()
            .absolute()
            .top(px(16.0))
            .right(px(16.0))
            .flex()
            .flex_col()
            .gap_2()
            .children(toasts.into_iter().map(|toast| self.render_toast(toast)))
    }
}
