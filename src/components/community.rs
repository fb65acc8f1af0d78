//! Community story showcase.

use dioxus::prelude::*;

use storycraft_ui::{Button, ButtonVariant, Card};

struct ShowcaseStory {
    title: &'static str,
    author: &'static str,
    excerpt: &'static str,
}

const STORIES: [ShowcaseStory; 4] = [
    ShowcaseStory {
        title: "The Whispering Woods",
        author: "Emily R.",
        excerpt: "A thrilling tale of mystery in an enchanted forest.",
    },
    ShowcaseStory {
        title: "Echoes of Tomorrow",
        author: "James T.",
        excerpt: "A sci-fi adventure exploring the future of humanity.",
    },
    ShowcaseStory {
        title: "Moonlit Dreams",
        author: "Sarah L.",
        excerpt: "A poetic journey through love and loss.",
    },
    ShowcaseStory {
        title: "The Forgotten Realm",
        author: "Alex M.",
        excerpt: "An epic fantasy of courage and destiny.",
    },
];

#[component]
pub fn Community() -> Element {
    rsx! {
        section { class: "community",
            h2 { class: "section-title", "Explore Stories from Our Community" }

            div { class: "community-grid",
                for (index, story) in STORIES.iter().enumerate() {
                    Card { key: "{story.title}", class: "story-card".to_string(),
                        div { class: "story-cover cover-{index}" }
                        h3 { class: "story-title", "{story.title}" }
                        p { class: "story-author", "by {story.author}" }
                        p { class: "story-excerpt", "{story.excerpt}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "story-read".to_string(),
                            "Read Now"
                        }
                    }
                }
            }
        }
    }
}
