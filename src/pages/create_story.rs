//! Story editor entry point. Requires a session.

use dioxus::prelude::*;

use storycraft_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::components::{icons, SidebarShell};
use crate::context::use_require_session;

#[component]
pub fn CreateStory() -> Element {
    if !use_require_session() {
        return rsx! {};
    }

    rsx! {
        SidebarShell {
            div { class: "workspace",
                h1 { class: "dashboard-title", "Create a New Story" }
                div { class: "workspace-grid",
                    Card {
                        CardHeader {
                            CardTitle { "Quick Start" }
                        }
                        CardContent {
                            p { class: "workspace-copy",
                                "Jump straight in with an AI-generated prompt and shape the \
                                 story as you go."
                            }
                            Button { variant: ButtonVariant::Primary,
                                {icons::plus_circle(18)}
                                "Generate a Prompt"
                            }
                        }
                    }
                    Card {
                        CardHeader {
                            CardTitle { "Custom Mode" }
                        }
                        CardContent {
                            p { class: "workspace-copy",
                                "Pick the theme, genre, and characters yourself before the \
                                 first word is written."
                            }
                            Button { variant: ButtonVariant::Outline,
                                {icons::pen_square(18)}
                                "Build from Scratch"
                            }
                        }
                    }
                }
            }
        }
    }
}
