//! Auth-gated navigation.
//!
//! A single gate decides, per activation, whether the user proceeds to the
//! destination or is funneled through the sign-in prompt. The identity and
//! router collaborators are capabilities owned by the surrounding app.

use crate::catalog::NavDestination;

/// Identity capability: current session status plus the ability to open the
/// sign-in prompt.
///
/// `prompt_sign_in` is fire-and-forget; the gate never observes or blocks on
/// the prompt's completion. Landing on the original target after a successful
/// sign-in is the identity flow's own business, not queued here.
pub trait IdentityProvider {
    fn is_authenticated(&self) -> bool;
    fn prompt_sign_in(&self);
}

/// Router capability.
pub trait NavigationHandler {
    fn navigate(&self, path: &str);
}

/// Outcome of a gated activation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NavEffect {
    /// The destination was reachable and navigation was performed
    Navigated(String),
    /// The destination is gated, no session exists, and the sign-in prompt
    /// was opened instead; no navigation is queued for resume
    PromptedSignIn,
}

/// The navigation gate shared by every interactive surface.
#[derive(Clone, Copy)]
pub struct AuthGatedNavigator<I, R> {
    identity: I,
    router: R,
}

impl<I: IdentityProvider, R: NavigationHandler> AuthGatedNavigator<I, R> {
    pub fn new(identity: I, router: R) -> Self {
        Self { identity, router }
    }

    /// Activate a destination.
    ///
    /// Auth status is sampled at the moment of the call, never cached: a
    /// sign-in can complete between two activations of the same control.
    /// Both side effects happen synchronously within the caller's turn.
    pub fn activate(&self, destination: &NavDestination) -> NavEffect {
        if destination.requires_auth && !self.identity.is_authenticated() {
            self.identity.prompt_sign_in();
            return NavEffect::PromptedSignIn;
        }
        self.router.navigate(destination.path);
        NavEffect::Navigated(destination.path.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Shared recording fakes for the identity and router capabilities.
    #[derive(Clone, Default)]
    pub struct FakeIdentity {
        pub signed_in: Rc<Cell<bool>>,
        pub prompts: Rc<Cell<usize>>,
    }

    impl IdentityProvider for FakeIdentity {
        fn is_authenticated(&self) -> bool {
            self.signed_in.get()
        }

        fn prompt_sign_in(&self) {
            self.prompts.set(self.prompts.get() + 1);
        }
    }

    #[derive(Clone, Default)]
    pub struct FakeRouter {
        pub visited: Rc<RefCell<Vec<String>>>,
    }

    impl NavigationHandler for FakeRouter {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{FakeIdentity, FakeRouter};
    use super::*;

    fn gated() -> NavDestination {
        NavDestination::new("Dashboard", "/dashboard", true)
    }

    fn open() -> NavDestination {
        NavDestination::new("Home", "/", false)
    }

    #[test]
    fn open_destination_navigates_regardless_of_auth() {
        for signed_in in [false, true] {
            let identity = FakeIdentity::default();
            identity.signed_in.set(signed_in);
            let router = FakeRouter::default();
            let gate = AuthGatedNavigator::new(identity.clone(), router.clone());

            assert_eq!(gate.activate(&open()), NavEffect::Navigated("/".into()));
            assert_eq!(router.visited.borrow().as_slice(), ["/"]);
            assert_eq!(identity.prompts.get(), 0);
        }
    }

    #[test]
    fn gated_destination_without_session_prompts_and_never_navigates() {
        let identity = FakeIdentity::default();
        let router = FakeRouter::default();
        let gate = AuthGatedNavigator::new(identity.clone(), router.clone());

        assert_eq!(gate.activate(&gated()), NavEffect::PromptedSignIn);
        assert!(router.visited.borrow().is_empty());
        assert_eq!(identity.prompts.get(), 1);
    }

    #[test]
    fn gated_destination_with_session_navigates() {
        let identity = FakeIdentity::default();
        identity.signed_in.set(true);
        let router = FakeRouter::default();
        let gate = AuthGatedNavigator::new(identity.clone(), router.clone());

        assert_eq!(
            gate.activate(&gated()),
            NavEffect::Navigated("/dashboard".into())
        );
        assert_eq!(router.visited.borrow().as_slice(), ["/dashboard"]);
    }

    #[test]
    fn auth_is_sampled_per_activation_not_cached() {
        let identity = FakeIdentity::default();
        let router = FakeRouter::default();
        let gate = AuthGatedNavigator::new(identity.clone(), router.clone());

        assert_eq!(gate.activate(&gated()), NavEffect::PromptedSignIn);

        // Sign-in completes between activations.
        identity.signed_in.set(true);
        assert_eq!(
            gate.activate(&gated()),
            NavEffect::Navigated("/dashboard".into())
        );
    }
}
