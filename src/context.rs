//! Capability wiring for StoryCraft.
//!
//! The coordination core in `storycraft-core` talks to the outside world
//! through narrow traits (identity, router, appearance, settings). This
//! module binds those traits to Dioxus signals and the desktop window, and
//! exposes the hooks components use to reach shared state.

use std::time::Instant;

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;

use storycraft_core::{
    AppearanceSink, IdentityProvider, JsonFileSettings, NavigationHandler,
    ResponsiveSurfaceSelector, ThemeController, ThemeMode, TooltipTicket, TOOLTIP_VISIBLE_FOR,
};

/// The concrete theme controller used by the app.
pub type AppTheme = ThemeController<JsonFileSettings, SignalAppearance>;

/// Path of the persisted settings file.
pub fn settings_path() -> std::path::PathBuf {
    crate::get_data_dir().join("settings.json")
}

/// Document-level presentation marker, rendered by the root layout as the
/// `dark` class on the app container.
#[derive(Clone, Copy)]
pub struct SignalAppearance {
    mode: Signal<ThemeMode>,
}

impl SignalAppearance {
    pub fn new(mode: Signal<ThemeMode>) -> Self {
        Self { mode }
    }
}

impl AppearanceSink for SignalAppearance {
    fn apply(&mut self, mode: ThemeMode) {
        let mut signal = self.mode;
        if *signal.peek() != mode {
            signal.set(mode);
        }
    }
}

/// Shared handle to the process-wide theme state.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    mode: Signal<ThemeMode>,
    controller: Signal<AppTheme>,
}

impl ThemeHandle {
    pub fn new(mode: Signal<ThemeMode>, controller: Signal<AppTheme>) -> Self {
        Self { mode, controller }
    }

    /// Reactive read of the current mode.
    pub fn mode(&self) -> ThemeMode {
        (self.mode)()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn toggle(&self) {
        let mut controller = self.controller;
        let mode = controller.write().toggle();
        tracing::debug!(mode = mode.as_str(), "theme toggled");
    }
}

/// Hook to access the shared theme state.
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

/// Mock session state standing in for a real identity provider.
///
/// `prompt_sign_in` opens the modal sign-in prompt; completing the prompt
/// flips the session flag. There is no queued "resume original navigation"
/// after sign-in succeeds.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    signed_in: Signal<bool>,
    show_sign_in: Signal<bool>,
}

impl SessionHandle {
    pub fn new(signed_in: Signal<bool>, show_sign_in: Signal<bool>) -> Self {
        Self {
            signed_in,
            show_sign_in,
        }
    }

    /// Reactive read of the session flag.
    pub fn is_signed_in(&self) -> bool {
        (self.signed_in)()
    }

    /// Reactive read of the prompt visibility.
    pub fn prompt_visible(&self) -> bool {
        (self.show_sign_in)()
    }

    pub fn complete_sign_in(&self) {
        let mut signed_in = self.signed_in;
        let mut show = self.show_sign_in;
        signed_in.set(true);
        show.set(false);
        tracing::info!("session started");
    }

    pub fn dismiss_prompt(&self) {
        let mut show = self.show_sign_in;
        show.set(false);
    }

    pub fn sign_out(&self) {
        let mut signed_in = self.signed_in;
        signed_in.set(false);
        tracing::info!("session ended");
    }
}

impl IdentityProvider for SessionHandle {
    /// Sampled at the moment of a navigation attempt, never cached; peek
    /// avoids subscribing event-handler scopes to the session flag.
    fn is_authenticated(&self) -> bool {
        *self.signed_in.peek()
    }

    fn prompt_sign_in(&self) {
        let mut show = self.show_sign_in;
        show.set(true);
    }
}

/// Hook to access the shared session state.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Guard hook for routes that require a session.
///
/// Reaching a gated route without a session sends the visitor back to the
/// landing page and opens the sign-in prompt. Returns the reactive session
/// flag so pages can skip rendering gated content while the redirect runs.
pub fn use_require_session() -> bool {
    let session = use_session();
    let navigator = use_navigator();
    let signed_in = session.is_signed_in();

    use_effect(move || {
        if !session.is_signed_in() {
            tracing::debug!("gated route without session, redirecting");
            navigator.replace(crate::app::Route::Landing {});
            session.prompt_sign_in();
        }
    });

    signed_in
}

/// Router capability bound to the Dioxus navigator.
#[derive(Clone, Copy)]
pub struct AppRouter {
    navigator: Navigator,
}

impl AppRouter {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl NavigationHandler for AppRouter {
    fn navigate(&self, path: &str) {
        if let Some(failure) = self.navigator.push(path.to_string()) {
            tracing::warn!(path, ?failure, "navigation failed");
        }
    }
}

/// Hook wiring a [`ResponsiveSurfaceSelector`] to the desktop window.
///
/// The initial mode is computed synchronously from the current window width,
/// so the first render already mounts the right presentation. Resize events
/// only write the signal when the breakpoint is actually crossed.
pub fn use_surface_selector() -> Signal<ResponsiveSurfaceSelector> {
    let window = use_window();
    let scale = window.scale_factor();
    let initial_width = window.inner_size().to_logical::<f64>(scale).width;

    let mut selector = use_signal(|| ResponsiveSurfaceSelector::new(initial_width));

    use_wry_event_handler(move |event, _target| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let width = size.to_logical::<f64>(scale).width;
            let mut current = *selector.peek();
            if let Some(mode) = current.on_resize(width) {
                tracing::debug!(?mode, width, "presentation surface switched");
                selector.set(current);
            }
        }
    });

    selector
}

/// Schedule the expiry timer for a tooltip ticket against the dock signal's
/// scheduler. The task is scoped to the calling component, so unmounting the
/// dock cancels any pending expiry.
pub fn schedule_tooltip_expiry<I, R>(
    mut dock: Signal<storycraft_core::DockController<I, R>>,
    ticket: TooltipTicket,
) where
    I: IdentityProvider + 'static,
    R: NavigationHandler + 'static,
{
    spawn(async move {
        tokio::time::sleep(TOOLTIP_VISIBLE_FOR).await;
        dock.write().expire_tooltip(&ticket);
    });
}

/// Current instant, named so call sites read as event timestamps.
pub fn now() -> Instant {
    Instant::now()
}
