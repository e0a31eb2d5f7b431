//! Home Page
//!
//! The page the shell mounts: a dark sidebar hosting the language selector
//! and a content area with the session greeting. Wires the selector's
//! language-change callback to persist the preference durably before the
//! reload fires.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::language_selector::LanguageSelector;
use crate::eventing::{AppEvent, EventBus};
use crate::i18n::{t, Language};
use crate::theme::colors::ConverseColors;
use crate::utils::config_store;

/// Page-specific initialization data
#[derive(Debug, Clone, Copy)]
pub struct PageProps {
    /// Language this page instance was loaded for
    pub language: Language,
}

/// Home page view
pub struct HomePage {
    entities: AppEntities,
    props: PageProps,
    language_selector: Entity<LanguageSelector>,
}

impl HomePage {
    pub fn new(entities: AppEntities, props: PageProps, cx: &mut Context<Self>) -> Self {
        let language_selector = cx.new(|cx| {
            let mut selector = LanguageSelector::new(entities.clone(), cx);
            selector.on_language_change(|lang, cx| {
                // Persist before the navigate event is handled: the reload
                // discards every in-memory entity, so the choice must already
                // be durable when the callback returns.
                match config_store::save_language(lang) {
                    Ok(()) => {
                        let message = t(lang, "toast-language-changed").to_string();
                        cx.global::<EventBus>().send(AppEvent::success(message));
                    }
                    Err(err) => {
                        tracing::error!("failed to persist language preference: {err:#}");
                        cx.global::<EventBus>().send(AppEvent::error(err.to_string()));
                    }
                }
            });
            selector
        });

        // Re-render on language or session changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            props,
            language_selector,
        }
    }

    pub fn props(&self) -> &PageProps {
        &self.props
    }

    fn render_sidebar(&self, lang: Language) -> impl IntoElement {
        div()
            .w(px(260.0))
            .h_full()
            .bg(ConverseColors::sidebar_bg())
            .flex()
            .flex_col()
            .p_2()
            .gap_1()
            .child(
                div()
                    .px_4()
                    .py_3()
                    .text_size(px(16.0))
                    .text_color(ConverseColors::text_light())
                    .child(t(lang, "app-title")),
            )
            .child(div().flex_1())
            .child(self.language_selector.clone())
    }

    fn render_content(&self, lang: Language, cx: &Context<Self>) -> impl IntoElement {
        let session = self.entities.session.read(cx);
        let greeting = match session.user() {
            Some(user) => gpui::SharedString::from(user.to_string()),
            None => t(lang, "home-signed-out"),
        };

        div()
            .flex_1()
            .h_full()
            .bg(ConverseColors::content_bg())
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(20.0))
                    .text_color(ConverseColors::text_primary())
                    .child(t(lang, "home-welcome")),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(ConverseColors::text_muted())
                    .child(greeting),
            )
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let lang = self.entities.i18n.read(cx).language;

        div()
            .size_full()
            .flex()
            .flex_row()
            .child(self.render_sidebar(lang))
            .child(self.render_content(lang, cx))
    }
}
