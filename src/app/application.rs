//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application. Owns the app-level event pump
//! and the hard-navigation handler that tears a window down and reopens it
//! rooted at a new language.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::navigation;
use crate::app::shell::AppShell;
use crate::eventing::{AppEvent, EventBus};
use crate::features::home::page::{HomePage, PageProps};
use crate::i18n::{self, Language};
use crate::state::session_state::SessionStatus;
use crate::utils::config_store;

actions!(converse, [Quit]);

/// Run the Converse GUI application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Create event channel for view -> app communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        cx.set_global(EventBus::new(event_tx));

        // Start the app-level event pump
        cx.spawn(async move |cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, cx);
                });
            }
        })
        .detach();

        // Startup language: persisted preference, else OS locale, else English
        let language = config_store::load_language()
            .or_else(i18n::system_language)
            .unwrap_or_default();
        tracing::info!(code = language.code(), "starting at language");

        open_main_window(language, cx);
    });
}

/// Open the main window rooted at the given language. Builds a fresh entity
/// set, so calling this after closing the previous window is a full reload.
fn open_main_window(language: Language, cx: &mut App) {
    let entities = AppEntities::init(language, cx);
    cx.set_global(entities.clone());

    // Session establishment is an external concern; without an auth backend
    // the session resolves straight to unauthenticated.
    entities.session.update(cx, |session, cx| {
        session.set_status(SessionStatus::Unauthenticated);
        cx.notify();
    });

    let bounds = Bounds::centered(None, gpui::size(px(1100.0), px(720.0)), cx);
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Converse")),
            ..Default::default()
        }),
        ..Default::default()
    };

    let opened = cx.open_window(window_options, |_window, cx| {
        let page = cx.new(|cx| HomePage::new(entities.clone(), PageProps { language }, cx));
        cx.new(|cx| AppShell::new(entities.clone(), page.into(), cx))
    });

    if let Err(err) = opened {
        tracing::error!("failed to open main window: {err}");
        return;
    }

    cx.activate(true);
}

/// Dispatch an AppEvent from the pump
fn dispatch_event(event: AppEvent, cx: &mut App) {
    match event {
        AppEvent::Toast { level, message } => {
            let entities = cx.global::<AppEntities>().clone();
            entities.toasts.update(cx, |toasts, cx| {
                toasts.push(level, message);
                cx.notify();
            });
        }
        AppEvent::SessionChanged { status } => {
            let entities = cx.global::<AppEntities>().clone();
            entities.session.update(cx, |session, cx| {
                session.set_status(status);
                cx.notify();
            });
        }
        AppEvent::Navigate { path } => {
            handle_navigate(&path, cx);
        }
    }
}

/// Hard navigation: reopen the window at the target path, discarding every
/// in-memory entity. The new window opens before the old ones close so the
/// quit-on-last-window hook never sees an empty window list.
fn handle_navigate(path: &str, cx: &mut App) {
    match navigation::language_for_path(path) {
        Ok(language) => {
            tracing::info!(%path, "hard navigation");
            let stale = cx.windows();
            open_main_window(language, cx);
            for window in stale {
                let _ = window.update(cx, |_, window, _| window.remove_window());
            }
        }
        Err(err) => {
            tracing::error!("navigation rejected: {err}");
        }
    }
}
