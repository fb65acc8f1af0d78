//! Progress bar for story completion.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ProgressProps {
    /// Completion percentage, clamped to 0..=100
    pub value: u8,
}

#[component]
pub fn Progress(props: ProgressProps) -> Element {
    let value = props.value.min(100);
    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            "aria-valuenow": "{value}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div {
                class: "progress-fill",
                style: "width: {value}%;",
            }
        }
    }
}
