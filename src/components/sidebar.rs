//! Dashboard shell: collapsible sidebar (wide) or bottom dock (compact).
//!
//! Both presentations render the sidebar catalog. Only one is mounted at a
//! time; double-mounting would duplicate tooltip and gate state for the same
//! destinations.

use dioxus::prelude::*;

use storycraft_core::{sidebar_catalog, AuthGatedNavigator, NavDestination};

use crate::components::icons;
use crate::components::NavDock;
use crate::context::{use_session, use_surface_selector, AppRouter};

#[derive(Props, Clone, PartialEq)]
pub struct SidebarShellProps {
    pub children: Element,
}

#[component]
pub fn SidebarShell(props: SidebarShellProps) -> Element {
    let surface = use_surface_selector();
    let catalog = use_hook(sidebar_catalog);

    let wide = surface.read().is_wide();

    rsx! {
        div { class: "shell",
            if wide {
                SidebarNav { destinations: catalog.destinations().to_vec() }
            }
            main { class: if wide { "shell-main wide" } else { "shell-main" },
                {props.children}
            }
            if !wide {
                NavDock { destinations: catalog.destinations().to_vec() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SidebarNavProps {
    destinations: Vec<NavDestination>,
}

/// Expanded sidebar: icon rail that grows labels on hover.
#[component]
fn SidebarNav(props: SidebarNavProps) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let gate = use_hook(|| AuthGatedNavigator::new(session, AppRouter::new(navigator)));

    let mut open = use_signal(|| false);
    let signed_in = session.is_signed_in();

    rsx! {
        aside {
            class: if open() { "sidebar open" } else { "sidebar" },
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),

            div { class: "sidebar-brand",
                span { class: "sidebar-brand-icon", {icons::book(28)} }
                if open() {
                    span { class: "sidebar-brand-label", "StoryCraft AI" }
                }
            }

            nav { class: "sidebar-links",
                for dest in props.destinations.iter().copied() {
                    button {
                        r#type: "button",
                        class: "sidebar-link",
                        key: "{dest.label}",
                        "aria-label": "{dest.label}",
                        onclick: move |_| {
                            gate.activate(&dest);
                        },
                        span { class: "sidebar-link-icon", {icons::nav_icon(dest.path, 24)} }
                        if open() {
                            span { class: "sidebar-link-label", "{dest.label}" }
                        }
                    }
                }
            }

            if signed_in {
                button {
                    r#type: "button",
                    class: "sidebar-link sidebar-signout",
                    "aria-label": "Sign out",
                    onclick: move |_| session.sign_out(),
                    span { class: "sidebar-link-icon", {icons::log_out(24)} }
                    if open() {
                        span { class: "sidebar-link-label", "Sign Out" }
                    }
                }
            }
        }
    }
}
