use dioxus::prelude::*;

use portfolio_core::progress::{
    HERO_EXIT_FADE, TransitRange, hero_backdrop_shift, section_progress,
};
use portfolio_core::section::SectionId;

use crate::components::icons::IconArrowRight;
use crate::profile;
use crate::scroll::{scroll_to_section, use_page_scroll};
use crate::typing::use_role_rotator;

/// Full-height landing section. The intro animations play once on load via
/// stylesheet keyframes; the fade and backdrop drift while scrolling away
/// are driven from the shared scroll state.
#[component]
pub fn Hero() -> Element {
    let page = use_page_scroll();
    let typed = use_role_rotator();

    let state = *page.state.read();
    let exit = page
        .geometry(SectionId::Home)
        .map(|geometry| section_progress(&state, &geometry, TransitRange::ExitOnly))
        .unwrap_or(0.0);

    let content_opacity = HERO_EXIT_FADE.eval(exit);
    let backdrop_shift = hero_backdrop_shift(exit);

    rsx! {
        section { id: "home", class: "section hero",
            div {
                class: "hero-backdrop",
                style: "transform: translateY({backdrop_shift}%);",
                div { class: "hero-blob blob-a" }
                div { class: "hero-blob blob-b" }
            }

            div { class: "hero-content", style: "opacity: {content_opacity};",
                div { class: "hero-grid",
                    div { class: "hero-copy",
                        span { class: "hero-greeting intro intro-1", "Hi there, I'm" }
                        h1 { class: "hero-name intro intro-2", "{profile::FULL_NAME}" }
                        div { class: "hero-role intro intro-3",
                            h2 {
                                "{typed}"
                                span { class: "typing-caret" }
                            }
                        }
                        p { class: "hero-tagline intro intro-4", "{profile::TAGLINE}" }
                        div { class: "hero-actions intro intro-5",
                            button {
                                class: "btn btn-primary btn-lg",
                                onclick: move |_| scroll_to_section(SectionId::Projects),
                                "View My Work"
                                IconArrowRight {}
                            }
                            button {
                                class: "btn btn-outline btn-lg",
                                onclick: move |_| scroll_to_section(SectionId::Contact),
                                "Get In Touch"
                            }
                        }
                    }

                    div { class: "hero-portrait intro intro-3",
                        div { class: "portrait-card",
                            div { class: "portrait-glow" }
                            img {
                                src: "/assets/profile.jpg",
                                alt: profile::FULL_NAME,
                                class: "portrait-image",
                            }
                        }
                    }
                }

                div { class: "scroll-indicator",
                    div { class: "scroll-indicator-track",
                        div { class: "scroll-indicator-dot" }
                    }
                }
            }
        }
    }
}
