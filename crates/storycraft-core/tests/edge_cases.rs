//! End-to-end scenarios for the coordination core, driven through the public
//! API with recording capability fakes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use storycraft_core::{
    marketing_catalog, sidebar_catalog, AuthGatedNavigator, DockController, DockEffect, DockEntry,
    IdentityProvider, MemorySettings, NavEffect, NavigationHandler, ResponsiveSurfaceSelector,
    Settings, SurfaceMode, AppearanceSink, ThemeController, ThemeMode, TooltipScheduler,
    THEME_STORAGE_KEY, TOOLTIP_VISIBLE_FOR,
};

#[derive(Clone, Default)]
struct Session {
    signed_in: Rc<Cell<bool>>,
    prompts: Rc<Cell<usize>>,
}

impl IdentityProvider for Session {
    fn is_authenticated(&self) -> bool {
        self.signed_in.get()
    }

    fn prompt_sign_in(&self) {
        self.prompts.set(self.prompts.get() + 1);
    }
}

#[derive(Clone, Default)]
struct Router {
    visited: Rc<RefCell<Vec<String>>>,
}

impl NavigationHandler for Router {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

#[derive(Clone, Default)]
struct Appearance {
    applied: Rc<RefCell<Vec<ThemeMode>>>,
}

impl AppearanceSink for Appearance {
    fn apply(&mut self, mode: ThemeMode) {
        self.applied.borrow_mut().push(mode);
    }
}

#[test]
fn fresh_session_with_dark_system_preference_paints_dark_first() {
    let appearance = Appearance::default();
    let mut theme = ThemeController::new(MemorySettings::new(), appearance.clone());

    assert_eq!(theme.initialize(true), ThemeMode::Dark);
    // The dark marker was applied as a side effect of initialize, before any
    // render could observe the mode.
    assert_eq!(appearance.applied.borrow().as_slice(), [ThemeMode::Dark]);
}

#[test]
fn gated_dashboard_visit_without_session_prompts_only() {
    let session = Session::default();
    let router = Router::default();
    let gate = AuthGatedNavigator::new(session.clone(), router.clone());

    let catalog = marketing_catalog();
    let dashboard = catalog.find("Dashboard").unwrap();
    assert!(dashboard.requires_auth);

    assert_eq!(gate.activate(dashboard), NavEffect::PromptedSignIn);
    assert_eq!(session.prompts.get(), 1);
    assert!(router.visited.borrow().is_empty());
}

#[test]
fn tooltip_expires_after_the_visibility_window() {
    let mut tooltips = TooltipScheduler::new();
    let t0 = Instant::now();

    let ticket = tooltips.show("Home", t0);
    assert_eq!(tooltips.expires_at(), Some(t0 + TOOLTIP_VISIBLE_FOR));

    // 2000ms elapse with no further activation; the scheduled timer fires.
    tooltips.expire(&ticket);
    assert_eq!(tooltips.active_label(), None);
}

#[test]
fn resize_across_the_breakpoint_switches_exactly_once() {
    let mut selector = ResponsiveSurfaceSelector::new(1023.0);
    assert_eq!(selector.mode(), SurfaceMode::Compact);

    assert_eq!(selector.on_resize(1025.0), Some(SurfaceMode::Wide));
    assert_eq!(selector.on_resize(1030.0), None);
}

#[test]
fn sign_in_mid_session_unlocks_gated_dock_entries() {
    let session = Session::default();
    let router = Router::default();
    let entries: Vec<DockEntry> = sidebar_catalog()
        .destinations()
        .iter()
        .map(|d| DockEntry::Destination(*d))
        .collect();
    let mut dock = DockController::new(
        AuthGatedNavigator::new(session.clone(), router.clone()),
        entries,
    );

    let now = Instant::now();
    let (_, effect) = dock.tap("My Stories", now).unwrap();
    assert_eq!(effect, DockEffect::Nav(NavEffect::PromptedSignIn));
    assert_eq!(dock.active_tooltip(), Some("My Stories"));
    assert!(router.visited.borrow().is_empty());

    // The sign-in modal completes out of band.
    session.signed_in.set(true);

    let (_, effect) = dock
        .tap("My Stories", now + Duration::from_millis(500))
        .unwrap();
    assert_eq!(
        effect,
        DockEffect::Nav(NavEffect::Navigated("/my-stories".into()))
    );
    assert_eq!(router.visited.borrow().as_slice(), ["/my-stories"]);
}

#[test]
fn theme_toggle_via_dock_action_keeps_storage_and_visuals_in_step() {
    let session = Session::default();
    let router = Router::default();
    let mut entries: Vec<DockEntry> = marketing_catalog()
        .destinations()
        .iter()
        .map(|d| DockEntry::Destination(*d))
        .collect();
    entries.push(DockEntry::action("Dark Mode"));
    let mut dock = DockController::new(
        AuthGatedNavigator::new(session, router.clone()),
        entries,
    );

    let appearance = Appearance::default();
    let mut theme = ThemeController::new(MemorySettings::new(), appearance.clone());
    theme.initialize(false);

    // Tapping the action entry shows its tooltip and defers the perform to
    // the owner, which toggles the theme in the same turn.
    let (_, effect) = dock.tap("Dark Mode", Instant::now()).unwrap();
    assert_eq!(effect, DockEffect::Perform);
    let mode = theme.toggle();

    assert_eq!(mode, ThemeMode::Dark);
    assert_eq!(dock.active_tooltip(), Some("Dark Mode"));
    assert_eq!(
        appearance.applied.borrow().as_slice(),
        [ThemeMode::Light, ThemeMode::Dark]
    );
    assert!(router.visited.borrow().is_empty());
}

#[test]
fn both_surfaces_converge_on_the_persisted_theme() {
    // The marketing header and the dashboard shell each read the same store
    // within one session; after one of them toggles, a fresh initialize from
    // the other must observe the written value.
    let mut store = MemorySettings::new();
    store.set(THEME_STORAGE_KEY, "light").unwrap();

    let mut header_theme = ThemeController::new(&mut store, Appearance::default());
    header_theme.initialize(true);
    assert_eq!(header_theme.toggle(), ThemeMode::Dark);
    drop(header_theme);

    let mut shell_theme = ThemeController::new(&mut store, Appearance::default());
    assert_eq!(shell_theme.initialize(false), ThemeMode::Dark);
}
