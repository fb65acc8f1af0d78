//! Join-the-community call to action.

use dioxus::prelude::*;

use storycraft_core::IdentityProvider;
use storycraft_ui::{Button, ButtonVariant};

use crate::context::use_session;

#[component]
pub fn CtaBanner() -> Element {
    let session = use_session();

    rsx! {
        section { class: "cta-banner",
            h2 { class: "section-title", "Join Our StoryWriting Community" }
            p { class: "cta-sub",
                "Share your stories, connect with others, and inspire the world."
            }
            div { class: "cta-actions",
                Button {
                    variant: ButtonVariant::Pill,
                    onclick: move |_| session.prompt_sign_in(),
                    "Join Now"
                }
                Button { variant: ButtonVariant::PillOutline, "Explore More Stories" }
            }
        }
    }
}
