//! Authenticated dashboard. Requires a session.

use dioxus::prelude::*;

use crate::components::{ActivityEntry, DashboardContent, SidebarShell, Story};
use crate::context::use_require_session;

#[component]
pub fn Dashboard() -> Element {
    if !use_require_session() {
        return rsx! {};
    }

    rsx! {
        SidebarShell {
            DashboardContent {
                first_name: "Storyteller".to_string(),
                stories: Story::samples(),
                activities: ActivityEntry::samples(),
            }
        }
    }
}
