//! Card primitives for dashboard and community surfaces.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = match &props.class {
        Some(extra) => format!("card {extra}"),
        None => "card".to_string(),
    };
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardHeader(props: CardProps) -> Element {
    let class = match &props.class {
        Some(extra) => format!("card-header {extra}"),
        None => "card-header".to_string(),
    };
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardTitle(props: CardProps) -> Element {
    rsx! {
        h3 { class: "card-title", {props.children} }
    }
}

#[component]
pub fn CardContent(props: CardProps) -> Element {
    let class = match &props.class {
        Some(extra) => format!("card-content {extra}"),
        None => "card-content".to_string(),
    };
    rsx! {
        div { class: "{class}", {props.children} }
    }
}
