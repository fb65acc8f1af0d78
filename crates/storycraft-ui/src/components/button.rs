//! Button components.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Bordered secondary action
    Outline,
    /// Borderless, background on hover only
    Ghost,
    /// Rounded pill call-to-action
    Pill,
    /// Bordered pill
    PillOutline,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Pill => "btn btn-pill",
            ButtonVariant::PillOutline => "btn btn-pill-outline",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button following the design system.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Pill,
///         onclick: move |_| join(),
///         "Join Now"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = match &props.class {
        Some(extra) => format!("{} {}", props.variant.class(), extra),
        None => props.variant.class().to_string(),
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled: props.disabled,
            "aria-label": props.aria_label,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
