//! Property tests for the coordination core's algebraic guarantees.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use storycraft_core::{
    AppearanceSink, AuthGatedNavigator, IdentityProvider, MemorySettings, NavDestination,
    NavEffect, NavigationHandler, ResponsiveSurfaceSelector, ThemeController, ThemeMode,
    TooltipScheduler, WIDE_LAYOUT_MIN_WIDTH,
};

#[derive(Clone, Default)]
struct Session(Rc<Cell<bool>>, Rc<Cell<usize>>);

impl IdentityProvider for Session {
    fn is_authenticated(&self) -> bool {
        self.0.get()
    }

    fn prompt_sign_in(&self) {
        self.1.set(self.1.get() + 1);
    }
}

#[derive(Clone, Default)]
struct Router(Rc<RefCell<Vec<String>>>);

impl NavigationHandler for Router {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}

struct NullSink;

impl AppearanceSink for NullSink {
    fn apply(&mut self, _mode: ThemeMode) {}
}

proptest! {
    /// Ungated destinations always navigate, whatever the auth status.
    #[test]
    fn open_destinations_always_navigate(signed_in: bool) {
        let session = Session::default();
        session.0.set(signed_in);
        let router = Router::default();
        let gate = AuthGatedNavigator::new(session.clone(), router.clone());

        let dest = NavDestination::new("Home", "/", false);
        prop_assert_eq!(gate.activate(&dest), NavEffect::Navigated("/".into()));
        prop_assert_eq!(router.0.borrow().len(), 1);
        prop_assert_eq!(session.1.get(), 0);
    }

    /// Gated destinations without a session prompt exactly once per
    /// activation and never navigate.
    #[test]
    fn gated_destinations_without_session_only_prompt(activations in 1usize..8) {
        let session = Session::default();
        let router = Router::default();
        let gate = AuthGatedNavigator::new(session.clone(), router.clone());

        let dest = NavDestination::new("Dashboard", "/dashboard", true);
        for _ in 0..activations {
            prop_assert_eq!(gate.activate(&dest), NavEffect::PromptedSignIn);
        }
        prop_assert!(router.0.borrow().is_empty());
        prop_assert_eq!(session.1.get(), activations);
    }

    /// Toggling twice is the identity on the resolved mode.
    #[test]
    fn toggle_is_an_involution(system_prefers_dark: bool, extra_toggles in 0usize..4) {
        let mut theme = ThemeController::new(MemorySettings::new(), NullSink);
        theme.initialize(system_prefers_dark);
        for _ in 0..extra_toggles {
            theme.toggle();
        }
        let before = theme.mode().unwrap();
        theme.toggle();
        prop_assert_eq!(theme.toggle(), before);
    }

    /// Initialize is idempotent even against a contradicting system signal.
    #[test]
    fn initialize_is_idempotent(first: bool, second: bool) {
        let mut theme = ThemeController::new(MemorySettings::new(), NullSink);
        prop_assert_eq!(theme.initialize(first), theme.initialize(second));
    }

    /// Whatever the activation history, the visible tooltip is the last one
    /// shown, and no superseded ticket can clear it.
    #[test]
    fn tooltip_is_last_activation_wins(labels in proptest::collection::vec("[A-Z][a-z]{1,8}", 1..10)) {
        let mut tooltips = TooltipScheduler::new();
        let mut now = Instant::now();
        let mut tickets = Vec::new();

        for label in &labels {
            tickets.push(tooltips.show(label, now));
            now += Duration::from_millis(100);
        }

        let last = labels.last().unwrap().clone();
        prop_assert_eq!(tooltips.active_label(), Some(last.as_str()));

        // Every stale timer fires; only the newest ticket may clear state,
        // and it hasn't fired yet.
        for ticket in &tickets[..tickets.len() - 1] {
            tooltips.expire(ticket);
            prop_assert_eq!(tooltips.active_label(), Some(last.as_str()));
        }

        tooltips.expire(tickets.last().unwrap());
        prop_assert_eq!(tooltips.active_label(), None);
    }

    /// The selector's mode always reflects the latest width, and it switches
    /// exactly as many times as the width sequence crosses the breakpoint.
    #[test]
    fn surface_switches_match_breakpoint_crossings(widths in proptest::collection::vec(300.0f64..2000.0, 1..20)) {
        let mut selector = ResponsiveSurfaceSelector::new(widths[0]);
        let mut crossings = 0usize;
        let mut switches = 0usize;
        let mut prev_wide = widths[0] >= WIDE_LAYOUT_MIN_WIDTH;

        for &width in &widths[1..] {
            let wide = width >= WIDE_LAYOUT_MIN_WIDTH;
            if wide != prev_wide {
                crossings += 1;
            }
            prev_wide = wide;

            if selector.on_resize(width).is_some() {
                switches += 1;
            }
            prop_assert_eq!(selector.is_wide(), wide);
        }

        prop_assert_eq!(switches, crossings);
    }
}
