//! Landing hero with the rotating accent word.

use std::time::Duration;

use dioxus::prelude::*;

use storycraft_ui::{Button, ButtonVariant};

const ROTATING_TITLES: [&str; 5] = [
    "Creative",
    "Immersive",
    "Interactive",
    "Personalized",
    "Innovative",
];

const ROTATE_EVERY: Duration = Duration::from_secs(3);

#[component]
pub fn Hero() -> Element {
    let mut title_index = use_signal(|| 0usize);

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(ROTATE_EVERY).await;
                let next = (*title_index.peek() + 1) % ROTATING_TITLES.len();
                title_index.set(next);
            }
        });
    });

    let current = ROTATING_TITLES[title_index()];

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title",
                "Explore Your StoryWriting Potential"
                span { class: "hero-rotator",
                    span { key: "{current}", class: "hero-rotate-word", "{current}" }
                }
            }
            p { class: "hero-sub",
                "Unleash creativity with our AI-driven tools designed to enhance "
                "your narrative skills, from drafting ideas to crafting full stories."
            }
            div { class: "hero-actions",
                Button { variant: ButtonVariant::Outline, "Discover More" }
                Button { variant: ButtonVariant::Primary, "Start Writing" }
            }
        }
    }
}
