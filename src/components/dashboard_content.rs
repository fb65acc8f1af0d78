//! Dashboard body: stats, quick start, activity feed, story list.
//!
//! Pure presentation over mock data; every navigation decision goes through
//! the shell's catalogs and gate.

use dioxus::prelude::*;

use storycraft_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Progress};

use crate::app::Route;
use crate::components::icons;

#[derive(Clone, PartialEq, Debug)]
pub struct Story {
    pub id: u32,
    pub title: &'static str,
    pub status: &'static str,
    pub last_edited: &'static str,
    pub progress: u8,
    pub word_count: u32,
    pub genre: &'static str,
}

impl Story {
    /// Demo data standing in for a stories backend.
    pub fn samples() -> Vec<Story> {
        vec![
            Story {
                id: 1,
                title: "The Lost Kingdom",
                status: "Draft",
                last_edited: "2025-03-30",
                progress: 60,
                word_count: 4500,
                genre: "Fantasy",
            },
            Story {
                id: 2,
                title: "Echoes of the Past",
                status: "Published",
                last_edited: "2025-03-29",
                progress: 100,
                word_count: 12000,
                genre: "Historical Fiction",
            },
            Story {
                id: 3,
                title: "A New Dawn",
                status: "Draft",
                last_edited: "2025-03-28",
                progress: 20,
                word_count: 1500,
                genre: "Science Fiction",
            },
            Story {
                id: 4,
                title: "Whispers in the Dark",
                status: "Draft",
                last_edited: "2025-03-27",
                progress: 85,
                word_count: 9000,
                genre: "Mystery",
            },
        ]
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ActivityEntry {
    pub id: u32,
    pub action: &'static str,
    pub story_title: &'static str,
    pub timestamp: &'static str,
}

impl ActivityEntry {
    pub fn samples() -> Vec<ActivityEntry> {
        vec![
            ActivityEntry {
                id: 1,
                action: "Published",
                story_title: "The Lost Kingdom",
                timestamp: "2025-03-30 14:30",
            },
            ActivityEntry {
                id: 2,
                action: "Published",
                story_title: "Echoes of the Past",
                timestamp: "2025-03-29 09:15",
            },
            ActivityEntry {
                id: 3,
                action: "Started",
                story_title: "A New Dawn",
                timestamp: "2025-03-28 18:45",
            },
            ActivityEntry {
                id: 4,
                action: "Started",
                story_title: "Whispers in the Dark",
                timestamp: "2025-03-27 16:20",
            },
        ]
    }
}

const ACTIVITY_FILTERS: [&str; 3] = ["All", "Published", "Started"];

#[derive(Props, Clone, PartialEq)]
pub struct DashboardContentProps {
    pub first_name: String,
    pub stories: Vec<Story>,
    pub activities: Vec<ActivityEntry>,
}

#[component]
pub fn DashboardContent(props: DashboardContentProps) -> Element {
    let mut filter = use_signal(|| "All");
    let navigator = use_navigator();

    let total_words: u32 = props.stories.iter().map(|s| s.word_count).sum();
    let published = props
        .stories
        .iter()
        .filter(|s| s.status == "Published")
        .count();
    let drafts = props.stories.len() - published;

    let visible: Vec<ActivityEntry> = props
        .activities
        .iter()
        .filter(|a| filter() == "All" || a.action == filter())
        .cloned()
        .collect();

    let first_story = props.stories.first().cloned();

    rsx! {
        div { class: "dashboard",
            section { class: "dashboard-welcome",
                h1 { class: "dashboard-title", "Welcome back, {props.first_name}!" }
                p { class: "dashboard-sub",
                    "Unleash your creativity—continue your stories or embark on a new journey."
                }
            }

            section { class: "dashboard-stats",
                h2 { class: "dashboard-heading", "Your Writing Journey" }
                div { class: "stat-grid",
                    div { class: "stat-card stat-blue",
                        {icons::pen_square(36)}
                        div {
                            p { class: "stat-value", "{total_words}" }
                            p { class: "stat-label", "Words Written" }
                        }
                    }
                    div { class: "stat-card stat-purple",
                        {icons::check_circle(36)}
                        div {
                            p { class: "stat-value", "{published}" }
                            p { class: "stat-label", "Stories Published" }
                        }
                    }
                    div { class: "stat-card stat-green",
                        {icons::file_text(36)}
                        div {
                            p { class: "stat-value", "{drafts}" }
                            p { class: "stat-label", "Active Drafts" }
                        }
                    }
                }
            }

            section { class: "dashboard-quickstart",
                h2 { class: "dashboard-heading", "Quick Start" }
                div { class: "quickstart-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator.push(Route::CreateStory {});
                        },
                        {icons::plus_circle(18)}
                        "Create a New Story"
                    }
                    if let Some(story) = first_story {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                navigator.push(Route::MyStories {});
                            },
                            {icons::pen_square(18)}
                            "Continue {story.title}"
                        }
                    }
                }
            }

            section { class: "dashboard-activity",
                Card {
                    CardHeader {
                        CardTitle { "Recent Activity" }
                        div { class: "activity-filters",
                            for name in ACTIVITY_FILTERS {
                                Button {
                                    key: "{name}",
                                    variant: if filter() == name { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                                    onclick: move |_| filter.set(name),
                                    "{name}"
                                }
                            }
                        }
                    }
                    CardContent {
                        if visible.is_empty() {
                            div { class: "empty-state",
                                {icons::book_open(44)}
                                p { "No recent activity to display." }
                            }
                        } else {
                            ul { class: "activity-list",
                                for activity in visible {
                                    li { key: "{activity.id}", class: "activity-row",
                                        span { class: "activity-time", "{activity.timestamp}" }
                                        span { class: "activity-text",
                                            "{activity.action} "
                                            strong { "{activity.story_title}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "dashboard-stories",
                Card {
                    CardHeader {
                        CardTitle { "Your Stories" }
                    }
                    CardContent {
                        if props.stories.is_empty() {
                            div { class: "empty-state",
                                {icons::book_open(44)}
                                p { "No stories yet. Start your first one now!" }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| {
                                        navigator.push(Route::CreateStory {});
                                    },
                                    "Start Writing"
                                }
                            }
                        } else {
                            ul { class: "story-list",
                                for story in props.stories.clone() {
                                    li { key: "{story.id}", class: "story-row",
                                        div { class: "story-row-top",
                                            div {
                                                h3 { class: "story-row-title", "{story.title}" }
                                                p { class: "story-row-meta",
                                                    "{story.status} • {story.genre} • {story.word_count} words"
                                                }
                                                p { class: "story-row-edited", "Last Edited: {story.last_edited}" }
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                aria_label: "Edit {story.title}".to_string(),
                                                onclick: move |_| {
                                                    navigator.push(Route::MyStories {});
                                                },
                                                {icons::pen_square(18)}
                                            }
                                        }
                                        div { class: "story-row-progress",
                                            Progress { value: story.progress }
                                            span { class: "story-row-pct", "{story.progress}%" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
