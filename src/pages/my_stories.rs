//! Story library. Requires a session.

use dioxus::prelude::*;

use storycraft_ui::{Card, CardContent, Progress};

use crate::components::{SidebarShell, Story};
use crate::context::use_require_session;

#[component]
pub fn MyStories() -> Element {
    if !use_require_session() {
        return rsx! {};
    }

    let stories = use_hook(Story::samples);

    rsx! {
        SidebarShell {
            div { class: "workspace",
                h1 { class: "dashboard-title", "My Stories" }
                div { class: "workspace-grid",
                    for story in stories {
                        Card { key: "{story.id}", class: "story-card".to_string(),
                            CardContent {
                                h3 { class: "story-title", "{story.title}" }
                                p { class: "story-row-meta",
                                    "{story.status} • {story.genre} • {story.word_count} words"
                                }
                                p { class: "story-row-edited", "Last Edited: {story.last_edited}" }
                                div { class: "story-row-progress",
                                    Progress { value: story.progress }
                                    span { class: "story-row-pct", "{story.progress}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
