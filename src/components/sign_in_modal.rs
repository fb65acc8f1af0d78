//! Modal sign-in prompt.
//!
//! Stands in for a real identity provider. Opening it is synchronous with
//! the gesture that triggered the gate; completing it flips the session flag
//! and closes the modal. The navigation that opened the prompt is not
//! resumed afterwards.

use dioxus::prelude::*;

use crate::components::icons;
use crate::context::use_session;

#[component]
pub fn SignInModal() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| session.dismiss_prompt(),
            div {
                class: "modal-card",
                // Keep clicks inside the card from dismissing the prompt.
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-icon", {icons::book_open(36)} }
                h2 { class: "modal-title", "Sign in to StoryCraft" }
                p { class: "modal-text",
                    "Your stories, drafts, and community are waiting."
                }

                div { class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| session.complete_sign_in(),
                        "Continue as Storyteller"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| session.dismiss_prompt(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
