//! Marketing landing page.

use dioxus::prelude::*;

use crate::components::{Community, CtaBanner, Features, Footer, Header, Hero};

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page landing",
            Header {}
            main { class: "landing-main",
                Hero {}
                Features {}
                Community {}
                CtaBanner {}
            }
            Footer {}
        }
    }
}
