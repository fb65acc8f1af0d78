//! Compact bottom dock.
//!
//! One dock component serves both navigation contexts: the marketing header
//! mounts it with the marketing catalog plus a theme-toggle action entry, the
//! dashboard shell mounts it with the sidebar catalog. Each mount owns a
//! fresh `DockController`, so tooltip state is created and torn down with the
//! dock, and pending expiry timers die with the component.

use dioxus::prelude::*;

use storycraft_core::{
    AuthGatedNavigator, DockController, DockEffect, DockEntry, NavDestination,
};

use crate::components::icons;
use crate::context::{now, schedule_tooltip_expiry, use_session, use_theme, AppRouter, SessionHandle};

type AppDock = DockController<SessionHandle, AppRouter>;

#[derive(Props, Clone, PartialEq)]
pub struct NavDockProps {
    pub destinations: Vec<NavDestination>,
    /// Optional action entry appended after the destinations (the marketing
    /// dock renders the theme toggle this way)
    #[props(default)]
    pub action_label: Option<String>,
    #[props(default)]
    pub on_action: Option<EventHandler<()>>,
}

#[component]
pub fn NavDock(props: NavDockProps) -> Element {
    let session = use_session();
    let theme = use_theme();
    let navigator = use_navigator();

    let destinations = props.destinations.clone();
    let action_label = props.action_label.clone();
    let dock: Signal<AppDock> = use_signal(move || {
        let mut entries: Vec<DockEntry> = destinations
            .iter()
            .map(|d| DockEntry::Destination(*d))
            .collect();
        if let Some(label) = &action_label {
            entries.push(DockEntry::action(label.clone()));
        }
        DockController::new(
            AuthGatedNavigator::new(session, AppRouter::new(navigator)),
            entries,
        )
    });

    let on_action = props.on_action;
    let dark = theme.is_dark();

    let active = dock.read().active_tooltip().map(str::to_string);
    let entries = dock.read().entries().to_vec();

    rsx! {
        div { class: "dock-wrap",
            div { class: "dock",
                for entry in entries {
                    DockItem {
                        key: "{entry.label()}",
                        label: entry.label().to_string(),
                        active: active.as_deref() == Some(entry.label()),
                        icon: entry_icon(&entry, dark),
                        on_tap: move |label: String| {
                            // Tooltip and gate evaluation happen in this same
                            // turn; only the expiry is deferred.
                            let mut dock = dock;
                            let tapped = dock.write().tap(&label, now());
                            if let Some((ticket, effect)) = tapped {
                                if effect == DockEffect::Perform {
                                    if let Some(action) = on_action {
                                        action.call(());
                                    }
                                }
                                schedule_tooltip_expiry(dock, ticket);
                            }
                        },
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DockItemProps {
    label: String,
    active: bool,
    icon: Element,
    on_tap: EventHandler<String>,
}

#[component]
fn DockItem(props: DockItemProps) -> Element {
    let label = props.label.clone();
    rsx! {
        div { class: "dock-item",
            button {
                r#type: "button",
                class: "dock-btn",
                "aria-label": "{props.label}",
                onclick: move |_| props.on_tap.call(label.clone()),
                {props.icon.clone()}
            }
            if props.active {
                div { class: "dock-tooltip", "{props.label}" }
            }
        }
    }
}

fn entry_icon(entry: &DockEntry, dark: bool) -> Element {
    match entry {
        DockEntry::Destination(dest) => icons::nav_icon(dest.path, 26),
        DockEntry::Action { .. } => {
            if dark {
                icons::sun(26)
            } else {
                icons::moon(26)
            }
        }
    }
}
