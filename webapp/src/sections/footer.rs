use dioxus::prelude::*;

use portfolio_core::section::SectionId;

use crate::common;
use crate::components::icons::{IconGithub, IconLinkedin, IconMail};
use crate::profile;
use crate::scroll::scroll_to_section;

#[component]
pub fn Footer() -> Element {
    let quick_links = SectionId::ALL.map(|id| {
        rsx! {
            button {
                key: "{id.as_str()}",
                class: "footer-link",
                onclick: move |_| scroll_to_section(id),
                "{id.label()}"
            }
        }
    });

    let year = common::current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-accent" }

            div { class: "footer-grid",
                div { class: "footer-brand",
                    h3 { class: "brand-name", "{profile::FULL_NAME}" }
                    p { class: "footer-blurb",
                        "Full-stack developer passionate about creating reliable, \
                         user-friendly web solutions."
                    }
                }

                div { class: "footer-links",
                    h4 { "Quick Links" }
                    nav { class: "footer-nav", {quick_links.into_iter()} }
                }

                div { class: "footer-social",
                    h4 { "Elsewhere" }
                    div { class: "social-links",
                        a {
                            href: profile::GITHUB_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "GitHub",
                            class: "social-link",
                            IconGithub {}
                        }
                        a {
                            href: profile::LINKEDIN_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "LinkedIn",
                            class: "social-link",
                            IconLinkedin {}
                        }
                        a {
                            href: "mailto:{profile::EMAIL}",
                            aria_label: "Email",
                            class: "social-link",
                            IconMail {}
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                p { "© {year} {profile::FULL_NAME}. All rights reserved." }
            }
        }
    }
}
