//! Dock coordination: one navigator + tooltip pair per mounted dock.
//!
//! The product originally carried three independent copies of this logic
//! (marketing header dock, sidebar dock, desktop nav). Here a single
//! controller is parameterized by its entry list; each mounted dock gets a
//! fresh instance, so tooltip state is created and torn down with the dock.

use std::time::Instant;

use crate::catalog::NavDestination;
use crate::navigator::{AuthGatedNavigator, IdentityProvider, NavEffect, NavigationHandler};
use crate::tooltip::{TooltipScheduler, TooltipTicket};

/// One entry in a compact dock: a catalog destination, or an arbitrary
/// action performed by the owner (the marketing dock renders the theme
/// toggle this way). Exactly one of the two by construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DockEntry {
    Destination(NavDestination),
    Action { label: String },
}

impl DockEntry {
    pub fn action(label: impl Into<String>) -> Self {
        DockEntry::Action {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DockEntry::Destination(dest) => dest.label,
            DockEntry::Action { label } => label,
        }
    }
}

/// What a dock tap did besides showing the tooltip.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DockEffect {
    Nav(NavEffect),
    /// An action entry was tapped; the owner runs its perform callback
    Perform,
}

/// Coordination state for one mounted dock.
pub struct DockController<I, R> {
    navigator: AuthGatedNavigator<I, R>,
    entries: Vec<DockEntry>,
    tooltips: TooltipScheduler,
}

impl<I: IdentityProvider, R: NavigationHandler> DockController<I, R> {
    pub fn new(navigator: AuthGatedNavigator<I, R>, entries: Vec<DockEntry>) -> Self {
        Self {
            navigator,
            entries,
            tooltips: TooltipScheduler::new(),
        }
    }

    pub fn entries(&self) -> &[DockEntry] {
        &self.entries
    }

    pub fn active_tooltip(&self) -> Option<&str> {
        self.tooltips.active_label()
    }

    /// Handle a tap on the entry named `label`.
    ///
    /// The tooltip is shown and the navigation gate evaluated in the same
    /// synchronous turn, so both effects are observable before any later
    /// event is processed. The tooltip shows regardless of the navigation
    /// outcome.
    pub fn tap(&mut self, label: &str, now: Instant) -> Option<(TooltipTicket, DockEffect)> {
        let entry = self.entries.iter().find(|e| e.label() == label)?.clone();
        let ticket = self.tooltips.show(label, now);
        let effect = match entry {
            DockEntry::Destination(dest) => DockEffect::Nav(self.navigator.activate(&dest)),
            DockEntry::Action { .. } => DockEffect::Perform,
        };
        Some((ticket, effect))
    }

    /// Expiry callback for a previously scheduled tooltip timer.
    pub fn expire_tooltip(&mut self, ticket: &TooltipTicket) {
        self.tooltips.expire(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::marketing_catalog;
    use crate::navigator::test_support::{FakeIdentity, FakeRouter};

    fn dock_with(identity: &FakeIdentity, router: &FakeRouter) -> DockController<FakeIdentity, FakeRouter> {
        let mut entries: Vec<DockEntry> = marketing_catalog()
            .destinations()
            .iter()
            .map(|d| DockEntry::Destination(*d))
            .collect();
        entries.push(DockEntry::action("Dark Mode"));
        DockController::new(
            AuthGatedNavigator::new(identity.clone(), router.clone()),
            entries,
        )
    }

    #[test]
    fn tap_shows_tooltip_and_evaluates_gate_in_one_turn() {
        let identity = FakeIdentity::default();
        let router = FakeRouter::default();
        let mut dock = dock_with(&identity, &router);

        let (_, effect) = dock.tap("Dashboard", Instant::now()).unwrap();
        // Both effects occurred before this assertion runs.
        assert_eq!(dock.active_tooltip(), Some("Dashboard"));
        assert_eq!(effect, DockEffect::Nav(NavEffect::PromptedSignIn));
        assert!(router.visited.borrow().is_empty());
        assert_eq!(identity.prompts.get(), 1);
    }

    #[test]
    fn tooltip_shows_even_when_navigation_is_gated_off() {
        let identity = FakeIdentity::default();
        let router = FakeRouter::default();
        let mut dock = dock_with(&identity, &router);

        dock.tap("Community", Instant::now());
        assert_eq!(dock.active_tooltip(), Some("Community"));
    }

    #[test]
    fn action_entries_defer_to_the_owner() {
        let identity = FakeIdentity::default();
        let router = FakeRouter::default();
        let mut dock = dock_with(&identity, &router);

        let (_, effect) = dock.tap("Dark Mode", Instant::now()).unwrap();
        assert_eq!(effect, DockEffect::Perform);
        assert!(router.visited.borrow().is_empty());
        assert_eq!(identity.prompts.get(), 0);
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let identity = FakeIdentity::default();
        let router = FakeRouter::default();
        let mut dock = dock_with(&identity, &router);

        assert!(dock.tap("Settings", Instant::now()).is_none());
        assert_eq!(dock.active_tooltip(), None);
    }

    #[test]
    fn stale_expiry_does_not_clear_a_newer_tooltip() {
        let identity = FakeIdentity::default();
        identity.signed_in.set(true);
        let router = FakeRouter::default();
        let mut dock = dock_with(&identity, &router);

        let now = Instant::now();
        let (first, _) = dock.tap("Home", now).unwrap();
        dock.tap("Dashboard", now).unwrap();

        dock.expire_tooltip(&first);
        assert_eq!(dock.active_tooltip(), Some("Dashboard"));
    }
}
