//! LanguageSelector Component
//!
//! A sidebar trigger button plus a modal overlay listing the selectable
//! languages. Selecting an entry notifies the caller-supplied callback and
//! issues a hard navigation to "/<code>". The modal dismisses on a confirmed
//! outside click (pointer-down outside the dialog root followed by any
//! pointer-up) or on Enter without Shift while the dialog has focus.
//!
//! All mouse and key listeners exist only while the open dialog is painted,
//! and entity subscriptions are held as scoped guards, so nothing outlives
//! the view.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, MouseUpEvent, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation;
use crate::components::primitives::button::Button;
use crate::eventing::{AppEvent, EventBus};
use crate::i18n::{t, Language};
use crate::state::selector_state::SelectorState;
use crate::theme::colors::ConverseColors;

/// Language selector with trigger button and modal overlay
pub struct LanguageSelector {
    entities: AppEntities,
    state: SelectorState,
    focus_handle: FocusHandle,
    on_language_change: Option<Box<dyn Fn(Language, &mut App) + 'static>>,
    _subscriptions: Vec<Subscription>,
}

impl LanguageSelector {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render when the active language changes
        let subscription = cx.observe(&entities.i18n, |_this, _, cx| cx.notify());

        Self {
            entities,
            state: SelectorState::new(),
            focus_handle: cx.focus_handle(),
            on_language_change: None,
            _subscriptions: vec![subscription],
        }
    }

    /// Set the language-change callback. Invoked before navigation is issued;
    /// its effect must be durable by the time it returns, because the
    /// navigation that follows discards all in-memory state.
    pub fn on_language_change(&mut self, handler: impl Fn(Language, &mut App) + 'static) {
        self.on_language_change = Some(Box::new(handler));
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Trigger activation: open the modal and focus the dialog for key events
    fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.open();
        window.focus(&self.focus_handle);
        cx.notify();
    }

    /// Entry activation: notify the callback, issue the hard navigation,
    /// close. The callback runs first and synchronously; the navigate event
    /// is only handled after this update completes.
    fn select_language(&mut self, lang: Language, cx: &mut Context<Self>) {
        if let Some(handler) = &self.on_language_change {
            handler(lang, cx);
        }

        let path = navigation::path_for(lang);
        tracing::info!(code = lang.code(), %path, "language selected, reloading");
        cx.global::<EventBus>().send(AppEvent::Navigate { path });

        self.state.select(lang);
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if event.keystroke.key == "enter"
            && self.state.key_enter(event.keystroke.modifiers.shift)
        {
            cx.stop_propagation();
            cx.notify();
        }
    }

    fn on_inside_down(&mut self, _: &MouseDownEvent, _window: &mut Window, _cx: &mut Context<Self>) {
        self.state.pointer_down(true);
    }

    fn on_outside_down(&mut self, _: &MouseDownEvent, _window: &mut Window, _cx: &mut Context<Self>) {
        self.state.pointer_down(false);
    }

    fn on_pointer_up(&mut self, _: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.state.pointer_up() {
            tracing::debug!("language modal dismissed by outside click");
            cx.notify();
        }
    }

    fn render_entry(&self, lang: Language, cx: &Context<Self>) -> impl IntoElement {
        Button::entry(
            SharedString::from(format!("lang-{}", lang.code())),
            lang.display_name(),
        )
        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
            this.select_language(lang, cx);
        }))
    }

    fn render_dialog(&self, cx: &Context<Self>) -> impl IntoElement {
        let lang = self.entities.i18n.read(cx).language;

        // The dialog root: its bounds define inside vs outside for dismissal.
        div()
            .id("language-dialog")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_inside_down))
            .on_mouse_down_out(cx.listener(Self::on_outside_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_pointer_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::on_pointer_up))
            .bg(ConverseColors::content_bg())
            .border_1()
            .border_color(ConverseColors::border())
            .rounded_lg()
            .shadow_lg()
            .min_w(px(400.0))
            .max_w(px(600.0))
            .p_6()
            .flex()
            .flex_col()
            .child(
                div()
                    .mb_10()
                    .text_size(px(30.0))
                    .text_color(ConverseColors::text_primary())
                    .child(t(lang, "modal-available-languages")),
            )
            .child(
                div()
                    .mt_6()
                    .mb_2()
                    .text_size(px(14.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(ConverseColors::text_primary())
                    .child(t(lang, "modal-select-language")),
            )
            .children(Language::all().iter().map(|l| self.render_entry(*l, cx)))
    }
}

impl Focusable for LanguageSelector {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for LanguageSelector {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let lang = self.entities.i18n.read(cx).language;

        let mut root = div().w_full().child(
            Button::sidebar("change-language-trigger", t(lang, "sidebar-change-language"))
                .icon("🌐")
                .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                    this.open(window, cx);
                })),
        );

        if self.state.is_open() {
            // Backdrop with the dialog centered inside it
            root = root.child(
                div()
                    .absolute()
                    .inset_0()
                    .bg(ConverseColors::backdrop())
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(self.render_dialog(cx)),
            );
        }

        root
    }
}
