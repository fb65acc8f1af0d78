//! Community stories page. Requires a session.

use dioxus::prelude::*;

use crate::components::{Community, Footer, Header};
use crate::context::use_require_session;

#[component]
pub fn CommunityPage() -> Element {
    if !use_require_session() {
        return rsx! {};
    }

    rsx! {
        div { class: "page community-page",
            Header {}
            main { class: "landing-main",
                Community {}
            }
            Footer {}
        }
    }
}
