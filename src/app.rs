use dioxus::desktop::use_window;
use dioxus::prelude::*;

use storycraft_core::{JsonFileSettings, ThemeController, ThemeMode};

use crate::components::SignInModal;
use crate::context::{settings_path, SessionHandle, SignalAppearance, ThemeHandle};
use crate::pages::{CommunityPage, CreateStory, Dashboard, Landing, MyStories};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Marketing landing page
/// - `/community` - Community stories (gated)
/// - `/dashboard` - Authenticated dashboard shell (gated)
/// - `/create-story` - Story editor entry (gated)
/// - `/my-stories` - Story library (gated)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/community")]
    CommunityPage {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/create-story")]
    CreateStory {},
    #[route("/my-stories")]
    MyStories {},
}

/// Root application component.
///
/// Provides global styles, theme and session context, and routing. The theme
/// is resolved once here, at session bootstrap: the persisted flag wins,
/// otherwise the window's reported system theme, and the resolved mode is
/// applied before the first paint.
#[component]
pub fn App() -> Element {
    let window = use_window();
    let system_prefers_dark = matches!(
        window.theme(),
        dioxus::desktop::tao::window::Theme::Dark
    );

    let mode: Signal<ThemeMode> = use_signal(|| ThemeMode::Light);
    let controller = use_signal(|| {
        let store = JsonFileSettings::open(settings_path());
        let mut theme = ThemeController::new(store, SignalAppearance::new(mode));
        let resolved = theme.initialize(system_prefers_dark);
        tracing::info!(mode = resolved.as_str(), "theme resolved at bootstrap");
        theme
    });

    let signed_in: Signal<bool> = use_signal(|| false);
    let show_sign_in: Signal<bool> = use_signal(|| false);

    let theme = use_context_provider(|| ThemeHandle::new(mode, controller));
    let session = use_context_provider(|| SessionHandle::new(signed_in, show_sign_in));

    let app_class = if theme.is_dark() { "app dark" } else { "app" };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{app_class}",
            Router::<Route> {}
            if session.prompt_visible() {
                SignInModal {}
            }
        }
    }
}
