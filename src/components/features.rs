//! Three-step feature carousel with autoplay.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::icons;

struct FeatureStep {
    step: &'static str,
    title: &'static str,
    content: &'static str,
}

const FEATURES: [FeatureStep; 3] = [
    FeatureStep {
        step: "Step 1",
        title: "Get Started",
        content: "Sign up and explore the platform with an interactive onboarding tutorial.",
    },
    FeatureStep {
        step: "Step 2",
        title: "Create Your Story",
        content: "Start writing with AI-generated prompts in Quick Start or customize your \
                  story with themes, genres, and characters in Custom Mode.",
    },
    FeatureStep {
        step: "Step 3",
        title: "Share & Connect",
        content: "Publish your story, get feedback from the community, and connect with \
                  other storytellers.",
    },
];

/// Autoplay advances to the next step every 4 seconds, accumulated in 100ms
/// ticks so the progress indicator can fill smoothly.
const AUTOPLAY_INTERVAL_MS: f32 = 4000.0;
const TICK: Duration = Duration::from_millis(100);

#[component]
pub fn Features() -> Element {
    let mut current = use_signal(|| 0usize);
    let mut progress = use_signal(|| 0.0f32);

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(TICK).await;
                if *progress.peek() < 100.0 {
                    let step = 100.0 / (AUTOPLAY_INTERVAL_MS / TICK.as_millis() as f32);
                    let p = *progress.peek();
                    progress.set(p + step);
                } else {
                    let c = *current.peek();
                    current.set((c + 1) % FEATURES.len());
                    progress.set(0.0);
                }
            }
        });
    });

    rsx! {
        section { class: "features",
            h2 { class: "section-title", "Your StoryWriting Journey Starts Here" }

            div { class: "features-layout",
                div { class: "features-steps",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        div {
                            key: "{feature.step}",
                            class: if index == current() { "feature-step active" } else { "feature-step" },
                            onclick: move |_| {
                                current.set(index);
                                progress.set(0.0);
                            },
                            div { class: if index == current() { "feature-marker active" } else { "feature-marker" },
                                if index == current() {
                                    {icons::check_circle(22)}
                                } else {
                                    span { class: "feature-number", "{index + 1}" }
                                }
                            }
                            div { class: "feature-copy",
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "feature-content", "{feature.content}" }
                            }
                        }
                    }
                }

                div { class: "features-panel",
                    div {
                        key: "{current()}",
                        class: "feature-panel-art panel-{current()}",
                        span { class: "feature-panel-step", "{FEATURES[current()].step}" }
                    }
                    div { class: "features-dots",
                        for index in 0..FEATURES.len() {
                            button {
                                r#type: "button",
                                key: "{index}",
                                class: if index == current() { "feature-dot active" } else { "feature-dot" },
                                "aria-label": "Show step {index + 1}",
                                onclick: move |_| {
                                    current.set(index);
                                    progress.set(0.0);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
