//! Marketing-site header.
//!
//! Wide: brand, gated nav links, session controls, theme toggle.
//! Compact: brand plus sign-in, with the bottom dock carrying navigation and
//! the theme toggle. The surface selector mounts exactly one of the two.

use dioxus::prelude::*;

use storycraft_core::{marketing_catalog, AuthGatedNavigator, IdentityProvider};

use crate::app::Route;
use crate::components::icons;
use crate::components::NavDock;
use crate::context::{use_session, use_surface_selector, use_theme, AppRouter};

const THEME_DOCK_LABEL: &str = "Theme";

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let theme = use_theme();
    let navigator = use_navigator();
    let surface = use_surface_selector();

    let gate = use_hook(|| AuthGatedNavigator::new(session, AppRouter::new(navigator)));
    let catalog = use_hook(marketing_catalog);

    let wide = surface.read().is_wide();
    let signed_in = session.is_signed_in();
    let dark = theme.is_dark();

    rsx! {
        header { class: "site-header",
            Link { to: Route::Landing {}, class: "brand", "StoryCraft" }

            if wide {
                nav { class: "header-links",
                    for dest in catalog.destinations().iter().copied() {
                        button {
                            r#type: "button",
                            class: "header-link",
                            key: "{dest.label}",
                            onclick: move |_| {
                                gate.activate(&dest);
                            },
                            "{dest.label}"
                        }
                    }
                }

                div { class: "header-actions",
                    if signed_in {
                        span { class: "session-chip", "Storyteller" }
                        button {
                            r#type: "button",
                            class: "icon-btn",
                            "aria-label": "Sign out",
                            onclick: move |_| session.sign_out(),
                            {icons::log_out(22)}
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "sign-in-btn",
                            onclick: move |_| session.prompt_sign_in(),
                            "Sign In"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "icon-btn",
                        "aria-label": if dark { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |_| theme.toggle(),
                        if dark {
                            {icons::sun(22)}
                        } else {
                            {icons::moon(22)}
                        }
                    }
                }
            } else {
                div { class: "header-actions",
                    if signed_in {
                        button {
                            r#type: "button",
                            class: "icon-btn",
                            "aria-label": "Sign out",
                            onclick: move |_| session.sign_out(),
                            {icons::log_out(26)}
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "icon-btn",
                            "aria-label": "Sign in",
                            onclick: move |_| session.prompt_sign_in(),
                            {icons::log_in(26)}
                        }
                    }
                }
            }
        }

        if !wide {
            NavDock {
                destinations: catalog.destinations().to_vec(),
                action_label: THEME_DOCK_LABEL.to_string(),
                on_action: move |_| theme.toggle(),
            }
        }
    }
}
