//! Site footer.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons;

#[component]
pub fn Footer() -> Element {
    let navigator = use_navigator();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-col",
                    h3 { class: "footer-brand", "StoryCraft" }
                    p { class: "footer-blurb",
                        "A platform to share and explore stories from around the world."
                    }
                }

                div { class: "footer-col",
                    h4 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-links",
                        for label in ["Home", "About", "Stories"] {
                            li { key: "{label}",
                                button {
                                    r#type: "button",
                                    class: "footer-link",
                                    onclick: move |_| {
                                        navigator.push(Route::Landing {});
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                div { class: "footer-col",
                    h4 { class: "footer-heading", "Follow Us" }
                    div { class: "footer-social",
                        a {
                            href: "https://twitter.com",
                            class: "footer-social-link",
                            "aria-label": "Twitter",
                            {icons::twitter(22)}
                        }
                        a {
                            href: "https://instagram.com",
                            class: "footer-social-link",
                            "aria-label": "Instagram",
                            {icons::instagram(22)}
                        }
                        a {
                            href: "https://github.com",
                            class: "footer-social-link",
                            "aria-label": "GitHub",
                            {icons::github(22)}
                        }
                    }
                }

                div { class: "footer-col",
                    h4 { class: "footer-heading", "Contact Us" }
                    div { class: "footer-contact",
                        {icons::mail(18)}
                        a {
                            href: "mailto:support@storycraft.com",
                            class: "footer-link",
                            "support@storycraft.com"
                        }
                    }
                }
            }

            p { class: "footer-copyright", "© 2025 StoryCraft. All rights reserved." }
        }
    }
}
