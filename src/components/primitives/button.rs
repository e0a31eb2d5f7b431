//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ConverseColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Sidebar row button (transparent on dark, full width)
    #[default]
    Sidebar,
    /// Modal list entry (transparent on light, full width)
    Entry,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    icon: Option<SharedString>,
    variant: ButtonVariant,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ButtonVariant::Sidebar,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a leading glyph
    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a sidebar row button
    pub fn sidebar(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Sidebar)
    }

    /// Create a modal list entry button
    pub fn entry(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Entry)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (text_color, hover_bg) = match self.variant {
            ButtonVariant::Sidebar => (
                ConverseColors::text_sidebar(),
                ConverseColors::sidebar_row_hover(),
            ),
            ButtonVariant::Entry => (
                ConverseColors::text_primary(),
                ConverseColors::entry_hover(),
            ),
        };

        let mut element = div()
            .id(self.id)
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .gap_2()
            .rounded_md()
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg));

        if let Some(icon) = self.icon {
            element = element.child(div().text_size(px(16.0)).child(icon));
        }

        element = element.child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
