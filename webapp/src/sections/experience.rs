use dioxus::prelude::*;

use portfolio_core::progress::{FADE_THROUGH_EARLY, TransitRange, parallax_drift};
use portfolio_core::section::SectionId;

use crate::components::icons::{IconBriefcase, IconCalendar, IconMapPin};

use super::{reveal_class, use_section_motion};

struct JobEntry {
    role: &'static str,
    company: &'static str,
    location: &'static str,
    period: &'static str,
    highlights: &'static [&'static str],
}

static JOBS: [JobEntry; 3] = [
    JobEntry {
        role: "Software Engineer",
        company: "Brightline Systems",
        location: "Lyon, France",
        period: "03/2024 – Present",
        highlights: &[
            "Develop and maintain scalable web applications across the stack.",
            "Cut average API response time by a third through query and cache tuning.",
            "Collaborate in a six-person team running two-week agile iterations.",
            "Pair with designers to land user-facing features with pixel-perfect precision.",
        ],
    },
    JobEntry {
        role: "Full-Stack Developer (Contract)",
        company: "Atelier Numérique",
        location: "Remote",
        period: "06/2023 – 12/2023",
        highlights: &[
            "Built and shipped client portals from design brief to production.",
            "Integrated third-party APIs and hardened backend error paths.",
            "Introduced shared component libraries that outlived the engagement.",
        ],
    },
    JobEntry {
        role: "Junior Web Developer (Intern)",
        company: "Studio Verne",
        location: "Lyon, France",
        period: "07/2022 – 09/2022",
        highlights: &[
            "Delivered responsive marketing pages under a senior engineer's review.",
            "Ran hands-on workshops bridging classroom theory with shipping code.",
        ],
    },
];

#[component]
pub fn Experience() -> Element {
    let motion = use_section_motion(SectionId::Experience, TransitRange::EntryExit);
    let opacity = FADE_THROUGH_EARLY.eval(motion.progress);
    let drift = parallax_drift(motion.progress, 100.0);
    let reveal = reveal_class(motion.revealed);

    let entries = JOBS.iter().enumerate().map(|(index, job)| {
        let delay = index * 200;
        let highlights = job.highlights.iter().enumerate().map(|(i, line)| {
            rsx! {
                li { key: "{i}",
                    span { class: "bullet-mark", "•" }
                    span { "{line}" }
                }
            }
        });

        rsx! {
            div {
                key: "{job.company}",
                class: "timeline-entry {reveal}",
                style: "transition-delay: {delay}ms;",
                div { class: "timeline-dot" }
                div { class: "job-card",
                    h3 { class: "job-role", "{job.role}" }
                    div { class: "job-company",
                        IconBriefcase {}
                        span { "{job.company}" }
                    }
                    div { class: "job-meta",
                        div { class: "job-meta-item",
                            IconMapPin {}
                            span { "{job.location}" }
                        }
                        div { class: "job-meta-item",
                            IconCalendar {}
                            span { "{job.period}" }
                        }
                    }
                    ul { class: "job-highlights", {highlights} }
                }
            }
        }
    });

    rsx! {
        section { id: "experience", class: "section experience",
            div { class: "section-inner narrow", style: "opacity: {opacity};",
                div { class: "{reveal}",
                    h2 { class: "section-heading", "Work Experience" }
                    p { class: "section-subheading",
                        "My professional journey and key accomplishments"
                    }
                }

                div { class: "timeline",
                    div { class: "timeline-rail" }
                    div { class: "timeline-entries", {entries} }
                }
            }

            div {
                class: "deco-blob deco-right alt",
                style: "transform: translateY({drift}px);",
            }
        }
    }
}
